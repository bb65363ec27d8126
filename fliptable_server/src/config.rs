//! Server configuration.
//!
//! Everything is read from environment variables (optionally via a `.env` file). Missing or invalid values are logged
//! and replaced with defaults, so a misconfigured server still starts and serves the demo market.
use std::path::PathBuf;

use fliptable_engine::{settlement_objects::SettlementTerms, RefundPolicy};
use ftb_common::{
    helpers::{env_or_default, optional_env},
    Usd,
};
use locus_tools::LocusConfig;
use log::*;

const DEFAULT_FTB_HOST: &str = "127.0.0.1";
const DEFAULT_FTB_PORT: u16 = 5001;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CLEARING_PRICE: Usd = Usd::from_dollars(8);
const DEFAULT_POOL_LOCATION: &str = "Mission District";
const DEFAULT_POOL_FOOD_TYPE: &str = "pizza";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory containing `escrow_pool.json` and `restaurants.json`.
    pub data_dir: PathBuf,
    pub clearing_price: Usd,
    pub refund_policy: RefundPolicy,
    /// The restaurant whose inventory is cleared. `None` selects the first one.
    pub restaurant_id: Option<String>,
    pub labels: MarketLabels,
    pub settlement: SettlementTerms,
    pub locus: LocusConfig,
}

/// Descriptive values reported alongside market data. They do not affect the allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketLabels {
    pub location: String,
    pub food_type: String,
    /// The restaurant's wallet address, which is also the recipient of pickup transfers.
    pub wallet_address: Option<String>,
}

impl Default for MarketLabels {
    fn default() -> Self {
        Self {
            location: DEFAULT_POOL_LOCATION.to_string(),
            food_type: DEFAULT_POOL_FOOD_TYPE.to_string(),
            wallet_address: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_FTB_HOST.to_string(),
            port: DEFAULT_FTB_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            clearing_price: DEFAULT_CLEARING_PRICE,
            refund_policy: RefundPolicy::default(),
            restaurant_id: None,
            labels: MarketLabels::default(),
            settlement: SettlementTerms::default(),
            locus: LocusConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = optional_env("FTB_HOST").unwrap_or_else(|| DEFAULT_FTB_HOST.into());
        let port = env_or_default("FTB_PORT", DEFAULT_FTB_PORT);
        let data_dir = PathBuf::from(optional_env("FTB_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into()));
        let clearing_price = configure_clearing_price();
        let refund_policy = env_or_default("FTB_REFUND_POLICY", RefundPolicy::default());
        let restaurant_id = optional_env("FTB_RESTAURANT_ID");
        let wallet_address = optional_env("RESTAURANT_WALLET");
        if wallet_address.is_none() {
            warn!("🪛️ RESTAURANT_WALLET is not set. Pickup transfers will be sent without a recipient.");
        }
        let labels = MarketLabels {
            location: optional_env("FTB_POOL_LOCATION").unwrap_or_else(|| DEFAULT_POOL_LOCATION.into()),
            food_type: optional_env("FTB_POOL_FOOD_TYPE").unwrap_or_else(|| DEFAULT_POOL_FOOD_TYPE.into()),
            wallet_address: wallet_address.clone(),
        };
        let settlement = configure_settlement(wallet_address);
        let locus = LocusConfig::new_from_env_or_default();
        Self { host, port, data_dir, clearing_price, refund_policy, restaurant_id, labels, settlement, locus }
    }
}

fn configure_clearing_price() -> Usd {
    let price = env_or_default("FTB_CLEARING_PRICE", DEFAULT_CLEARING_PRICE);
    if price.is_negative() {
        error!("🪛️ FTB_CLEARING_PRICE cannot be negative. Using the default, {DEFAULT_CLEARING_PRICE}, instead.");
        return DEFAULT_CLEARING_PRICE;
    }
    price
}

fn configure_settlement(recipient: Option<String>) -> SettlementTerms {
    let defaults = SettlementTerms::default();
    let mut amount = env_or_default("FTB_SETTLEMENT_AMOUNT", defaults.amount);
    if amount.is_negative() || amount == Usd::default() {
        error!("🪛️ FTB_SETTLEMENT_AMOUNT must be positive. Using the default, {}, instead.", defaults.amount);
        amount = defaults.amount;
    }
    let currency = optional_env("FTB_SETTLEMENT_CURRENCY").unwrap_or(defaults.currency);
    SettlementTerms { amount, currency, recipient, memo_prefix: defaults.memo_prefix }
}
