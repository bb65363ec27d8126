use std::fmt::Display;

use fliptable_engine::{
    market_objects::{MatchResults, PoolSummary},
    market_types::{Bid, TicketCode},
    settlement_objects::TransferReceipt,
    Match,
};
use ftb_common::Usd;
use serde::{Deserialize, Serialize};

use crate::config::MarketLabels;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
pub const SERVICE_NAME: &str = "fliptable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonResponse {
    pub status: String,
    pub message: String,
}

impl JsonResponse {
    pub fn error<S: Display>(message: S) -> Self {
        Self { status: STATUS_ERROR.to_string(), message: message.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok".to_string(), service: SERVICE_NAME.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowPoolResponse {
    pub buyer_count: usize,
    pub total_escrowed: Usd,
    pub avg_bid: Usd,
    pub location: String,
    pub food_type: String,
    pub users: Vec<Bid>,
}

impl EscrowPoolResponse {
    pub fn new(summary: PoolSummary, labels: &MarketLabels) -> Self {
        Self {
            buyer_count: summary.buyer_count,
            total_escrowed: summary.total_escrowed,
            avg_bid: summary.avg_bid,
            location: labels.location.clone(),
            food_type: labels.food_type.clone(),
            users: summary.users,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub wallet_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResultsResponse {
    pub matched: Vec<Match>,
    pub matched_count: usize,
    pub refunded: Vec<Bid>,
    pub refunded_count: usize,
    /// Bids at or above the clearing price.
    pub eligible_count: usize,
    /// Units of food the restaurant had on offer.
    pub unit_count: usize,
    pub clearing_price: Usd,
    pub restaurant_revenue: Usd,
    pub total_buyer_savings: Usd,
    pub food_saved_lbs: f64,
    pub restaurant: RestaurantSummary,
}

impl MatchResultsResponse {
    pub fn new(results: MatchResults, labels: &MarketLabels) -> Self {
        let food_saved_lbs = results.food_saved_lbs();
        let MatchResults { restaurant, allocation } = results;
        Self {
            matched_count: allocation.matched_count(),
            refunded_count: allocation.refunded_count(),
            eligible_count: allocation.eligible_count,
            unit_count: allocation.unit_count,
            clearing_price: allocation.clearing_price,
            restaurant_revenue: allocation.revenue,
            total_buyer_savings: allocation.total_savings,
            food_saved_lbs,
            restaurant: RestaurantSummary { name: restaurant.name, wallet_address: labels.wallet_address.clone() },
            matched: allocation.matched,
            refunded: allocation.refunded,
        }
    }
}

/// Body of a pickup confirmation. Older clients send the ticket as `qr_code`. When no ticket is given at all, the
/// first ticket of the round is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupRequest {
    #[serde(alias = "qr_code", default)]
    pub ticket_code: TicketCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupResponse {
    pub status: String,
    pub transaction_id: String,
    pub amount: String,
}

impl From<TransferReceipt> for PickupResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self { status: STATUS_SUCCESS.to_string(), transaction_id: receipt.transaction_id, amount: receipt.amount }
    }
}
