use std::sync::Arc;

use actix_web::{http::StatusCode, test::TestRequest};
use fliptable_engine::{MarketApi, MarketContext, RefundPolicy};
use ftb_common::Usd;
use serde_json::Value;

use super::{
    helpers::{configure_with, demo_market_api, send_request, RESTAURANT_WALLET},
    mocks::MockWallet,
};

async fn get_json(path: &str, market: MarketApi) -> (StatusCode, Value) {
    let (status, _, body) = send_request(TestRequest::get().uri(path), configure_with(market, MockWallet::new())).await;
    let json = serde_json::from_str(&body).expect("Response was not JSON");
    (status, json)
}

#[actix_web::test]
async fn home_and_health() {
    let _ = env_logger::try_init().ok();
    let (status, json) = get_json("/", demo_market_api()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "FlipTable API Running");
    let (status, json) = get_json("/health", demo_market_api()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({"status": "ok", "service": "fliptable"}));
}

#[actix_web::test]
async fn cors_headers_on_every_response() {
    let _ = env_logger::try_init().ok();
    let configure = configure_with(demo_market_api(), MockWallet::new());
    let (_, headers, _) = send_request(TestRequest::get().uri("/api/restaurants"), configure).await;
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(headers.get("ngrok-skip-browser-warning").unwrap(), "true");
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type,Authorization,ngrok-skip-browser-warning"
    );
}

#[actix_web::test]
async fn preflight() {
    let _ = env_logger::try_init().ok();
    let configure = configure_with(demo_market_api(), MockWallet::new());
    let req = TestRequest::default().method(actix_web::http::Method::OPTIONS).uri("/api/pickup");
    let (status, headers, body) = send_request(req, configure).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers.get("Access-Control-Allow-Methods").unwrap(), "GET,POST,PUT,DELETE,OPTIONS");
}

#[actix_web::test]
async fn escrow_pool() {
    let _ = env_logger::try_init().ok();
    let (status, json) = get_json("/api/escrow-pool", demo_market_api()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["buyer_count"], 23);
    assert_eq!(json["total_escrowed"].as_f64(), Some(207.0));
    assert_eq!(json["avg_bid"].as_f64(), Some(9.0));
    assert_eq!(json["location"], "Mission District");
    assert_eq!(json["food_type"], "pizza");
    assert_eq!(json["users"].as_array().map(Vec::len), Some(23));
    assert_eq!(json["users"][0]["user_id"], "usr_001");
    assert_eq!(json["users"][0]["amount_escrowed"].as_f64(), Some(11.5));
}

#[actix_web::test]
async fn empty_escrow_pool() {
    let _ = env_logger::try_init().ok();
    let market = MarketApi::new(Arc::new(MarketContext::new(vec![], vec![])), Usd::from_dollars(8));
    let (status, json) = get_json("/api/escrow-pool", market).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["buyer_count"], 0);
    assert_eq!(json["avg_bid"].as_f64(), Some(0.0));
    assert_eq!(json["users"], serde_json::json!([]));
}

#[actix_web::test]
async fn restaurants() {
    let _ = env_logger::try_init().ok();
    let (status, json) = get_json("/api/restaurants", demo_market_api()).await;
    assert_eq!(status, StatusCode::OK);
    let restaurants = json.as_array().expect("Expected a list");
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0]["name"], "Mario's Pizza");
    assert_eq!(restaurants[0]["inventory"][0]["item"], "Margherita Pizza");
    assert_eq!(restaurants[0]["inventory"][0]["quantity"], 8);
    assert_eq!(restaurants[0]["inventory"][1]["original_price"].as_f64(), Some(20.0));
}

#[actix_web::test]
async fn match_results() {
    let _ = env_logger::try_init().ok();
    let (status, json) = get_json("/api/match-results", demo_market_api()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched_count"], 14);
    assert_eq!(json["refunded_count"], 9);
    assert_eq!(json["eligible_count"], 18);
    assert_eq!(json["unit_count"], 14);
    assert_eq!(json["matched"].as_array().map(Vec::len), Some(14));
    assert_eq!(json["refunded"].as_array().map(Vec::len), Some(9));
    assert_eq!(json["clearing_price"].as_f64(), Some(8.0));
    assert_eq!(json["restaurant_revenue"].as_f64(), Some(112.0));
    assert_eq!(json["total_buyer_savings"].as_f64(), Some(27.5));
    assert_eq!(json["food_saved_lbs"].as_f64(), Some(14.0));
    assert_eq!(json["restaurant"]["name"], "Mario's Pizza");
    assert_eq!(json["restaurant"]["wallet_address"], RESTAURANT_WALLET);

    let first = &json["matched"][0];
    assert_eq!(first["user_id"], "usr_001");
    assert_eq!(first["item"], "Margherita Pizza");
    assert_eq!(first["ticket_code"], "FLIP-1000");
    assert_eq!(first["price"].as_f64(), Some(8.0));
    assert_eq!(first["original_bid"].as_f64(), Some(11.5));
    assert_eq!(first["savings"].as_f64(), Some(3.5));
    let last = &json["matched"][13];
    assert_eq!(last["user_id"], "usr_002");
    assert_eq!(last["item"], "Pepperoni Pizza");
    assert_eq!(last["ticket_code"], "FLIP-1013");

    let refunded = json["refunded"].as_array().unwrap();
    for low_bidder in ["usr_010", "usr_015", "usr_018", "usr_021", "usr_023"] {
        assert!(refunded.iter().any(|b| b["user_id"] == low_bidder), "{low_bidder} should be refunded");
    }
}

#[actix_web::test]
async fn match_results_are_repeatable() {
    let _ = env_logger::try_init().ok();
    let configure = configure_with(demo_market_api(), MockWallet::new());
    let (_, _, first) = send_request(TestRequest::get().uri("/api/match-results"), configure).await;
    let configure = configure_with(demo_market_api(), MockWallet::new());
    let (_, _, second) = send_request(TestRequest::get().uri("/api/match-results"), configure).await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn positional_refunds() {
    let _ = env_logger::try_init().ok();
    let market = demo_market_api().with_refund_policy(RefundPolicy::PositionalTail);
    let (status, json) = get_json("/api/match-results", market).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["refunded_count"], 9);
    assert_eq!(json["refunded"][0]["user_id"], "usr_015");
}

#[actix_web::test]
async fn no_restaurants() {
    let _ = env_logger::try_init().ok();
    let market = MarketApi::new(Arc::new(MarketContext::new(vec![], vec![])), Usd::from_dollars(8));
    let (status, json) = get_json("/api/match-results", market).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "The data was not found. No restaurants are available");
}

#[actix_web::test]
async fn unknown_restaurant() {
    let _ = env_logger::try_init().ok();
    let market = demo_market_api().with_restaurant(Some("rest_999".into()));
    let (status, json) = get_json("/api/match-results", market).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "The data was not found. Restaurant rest_999 does not exist");
}
