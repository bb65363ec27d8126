//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Market queries are synchronous and cheap: the allocation is recomputed from the in-memory market on every call.
//! The pickup handler awaits the wallet provider, which is bounded by the client timeout, so it never blocks a worker.
use actix_web::{get, options, web, HttpResponse, Responder};
use fliptable_engine::{MarketApi, SettlementApi, WalletTransfers};
use log::*;
use serde_json::json;

use crate::{
    config::MarketLabels,
    data_objects::{EscrowPoolResponse, HealthResponse, MatchResultsResponse, PickupRequest, PickupResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/")]
pub async fn home() -> impl Responder {
    trace!("💻️ Received home request");
    HttpResponse::Ok().json(json!({ "message": "FlipTable API Running" }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().json(HealthResponse::default())
}

/// Answers CORS preflight requests for any API path. The CORS headers themselves are added to every response by the
/// server middleware.
#[options("/api/{tail:.*}")]
pub async fn preflight() -> impl Responder {
    trace!("💻️ Received preflight request");
    HttpResponse::Ok().finish()
}

//----------------------------------------------   Market  ----------------------------------------------------
#[get("/api/escrow-pool")]
pub async fn escrow_pool(api: web::Data<MarketApi>, labels: web::Data<MarketLabels>) -> impl Responder {
    trace!("💻️ Received escrow pool request");
    let summary = api.pool_summary();
    debug!("💻️ Escrow pool has {} buyers with {} escrowed", summary.buyer_count, summary.total_escrowed);
    HttpResponse::Ok().json(EscrowPoolResponse::new(summary, &labels))
}

#[get("/api/restaurants")]
pub async fn restaurants(api: web::Data<MarketApi>) -> impl Responder {
    trace!("💻️ Received restaurants request");
    HttpResponse::Ok().json(api.restaurants())
}

#[get("/api/match-results")]
pub async fn match_results(
    api: web::Data<MarketApi>,
    labels: web::Data<MarketLabels>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received match results request");
    let results = api.match_results().map_err(|e| {
        warn!("💻️ Could not compute match results. {e}");
        ServerError::from(e)
    })?;
    debug!(
        "💻️ {} matched, {} refunded, revenue {}",
        results.allocation.matched_count(),
        results.allocation.refunded_count(),
        results.allocation.revenue
    );
    Ok(HttpResponse::Ok().json(MatchResultsResponse::new(results, &labels)))
}

//----------------------------------------------   Pickup  ----------------------------------------------------
route!(pickup => Post "/api/pickup" impl WalletTransfers);
/// Route handler for pickup confirmations.
///
/// The body is `{"ticket_code": "FLIP-1003"}` (`qr_code` is accepted too). An empty body confirms the first ticket.
/// The ticket is not checked against the allocation; every confirmation sends the fixed settlement amount to the
/// restaurant.
///
/// Responses:
/// * 200 `{"status": "success", "transaction_id": ..., "amount": ...}` when the transfer is accepted.
/// * 400 `{"status": "error", "message": <provider response>}` when the wallet provider rejects it.
/// * 500 `{"status": "error", "message": ...}` when the provider could not be reached.
pub async fn pickup<W>(body: web::Bytes, api: web::Data<SettlementApi<W>>) -> Result<HttpResponse, ServerError>
where W: WalletTransfers {
    trace!("💻️ Received pickup confirmation");
    let request = parse_pickup_request(&body)?;
    let receipt = api.confirm_pickup(&request.ticket_code).await?;
    Ok(HttpResponse::Ok().json(PickupResponse::from(receipt)))
}

fn parse_pickup_request(body: &[u8]) -> Result<PickupRequest, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PickupRequest::default());
    }
    let request = serde_json::from_slice::<PickupRequest>(body).map_err(|e| {
        debug!("💻️ Could not parse pickup request. {e}");
        ServerError::InvalidRequestBody(e.to_string())
    })?;
    if request.ticket_code.as_str().trim().is_empty() {
        return Err(ServerError::InvalidRequestBody("Ticket code cannot be empty".into()));
    }
    Ok(request)
}
