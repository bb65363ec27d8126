use std::sync::Arc;

use actix_web::{
    http::{header::HeaderMap, StatusCode},
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use fliptable_engine::{
    settlement_objects::SettlementTerms,
    MarketApi,
    MarketContext,
    SettlementApi,
    WalletTransfers,
};
use ftb_common::Usd;
use log::debug;

use crate::{
    config::MarketLabels,
    server::{configure_routes, cors_headers},
};

pub const RESTAURANT_WALLET: &str = "0xMarioWallet";

pub fn labels() -> MarketLabels {
    MarketLabels { wallet_address: Some(RESTAURANT_WALLET.to_string()), ..MarketLabels::default() }
}

pub fn terms() -> SettlementTerms {
    SettlementTerms { recipient: Some(RESTAURANT_WALLET.to_string()), ..SettlementTerms::default() }
}

pub fn demo_market_api() -> MarketApi {
    MarketApi::new(Arc::new(MarketContext::fallback()), Usd::from_dollars(8))
}

/// Registers all routes with the given market and wallet, as the server does.
pub fn configure_with<W>(market: MarketApi, wallet: W) -> impl FnOnce(&mut ServiceConfig)
where W: WalletTransfers + 'static {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(market))
            .app_data(web::Data::new(labels()))
            .app_data(web::Data::new(SettlementApi::new(wallet, terms())));
        configure_routes::<W>(cfg);
    }
}

pub async fn send_request<F>(req: TestRequest, configure: F) -> (StatusCode, HeaderMap, String)
where F: FnOnce(&mut ServiceConfig) {
    let app = App::new().wrap(cors_headers()).configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let body = String::from_utf8_lossy(&test::read_body(res).await).into_owned();
    (status, headers, body)
}
