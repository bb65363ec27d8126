use std::{sync::Arc, time::Duration};

use actix_web::{
    dev::Server,
    http::KeepAlive,
    middleware::{DefaultHeaders, Logger},
    web,
    App,
    HttpServer,
};
use fliptable_engine::{DataSource, MarketApi, MarketContext, SettlementApi, WalletTransfers};
use locus_tools::LocusApi;
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::locus::LocusWallet,
    routes::{escrow_pool, health, home, match_results, preflight, restaurants, PickupRoute},
};

pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization,ngrok-skip-browser-warning";
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let market = Arc::new(load_market(&config));
    let locus = LocusApi::new(config.locus.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, market, LocusWallet::new(locus))?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Loads the market from the configured data directory, falling back to the built-in demo data for any file that
/// cannot be read.
pub fn load_market(config: &ServerConfig) -> MarketContext {
    let (market, report) = MarketContext::load_from_dir(&config.data_dir);
    for (what, source) in [("Bid pool", &report.bids), ("Restaurants", &report.restaurants)] {
        match source {
            DataSource::File(_) => info!("📦️ {what} loaded from {source}"),
            DataSource::Fallback(_) => warn!("📦️ {what} loaded from {source}"),
        }
    }
    info!("📦️ Market has {} bids and {} restaurants", market.bids().len(), market.restaurants().len());
    market
}

pub fn create_server_instance(
    config: ServerConfig,
    market: Arc<MarketContext>,
    wallet: LocusWallet,
) -> Result<Server, ServerError> {
    let market_api = MarketApi::new(market, config.clearing_price)
        .with_refund_policy(config.refund_policy)
        .with_restaurant(config.restaurant_id.clone());
    info!("⚖️ {market_api:?}");
    let settlement_api = web::Data::new(SettlementApi::new(wallet, config.settlement.clone()));
    info!("💸️ {settlement_api:?}");
    let labels = web::Data::new(config.labels.clone());
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %r").log_target("ftb::access_log"))
            .app_data(web::Data::new(market_api.clone()))
            .app_data(labels.clone())
            .app_data(settlement_api.clone())
            .configure(configure_routes::<LocusWallet>)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Registers every FlipTable route. Handlers expect `web::Data` for [`MarketApi`], [`crate::config::MarketLabels`]
/// and `SettlementApi<W>` to be present in the app.
pub fn configure_routes<W>(cfg: &mut web::ServiceConfig)
where W: WalletTransfers + 'static {
    cfg.service(home)
        .service(health)
        .service(escrow_pool)
        .service(restaurants)
        .service(match_results)
        .service(PickupRoute::<W>::new())
        .service(preflight);
}

/// Permissive CORS headers plus the header that stops ngrok from serving its browser warning page.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", ALLOWED_HEADERS))
        .add(("Access-Control-Allow-Methods", ALLOWED_METHODS))
        .add(("ngrok-skip-browser-warning", "true"))
}
