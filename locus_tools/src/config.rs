use std::time::Duration;

use ftb_common::{
    helpers::{env_or_default, optional_env},
    Secret,
};
use log::*;

pub const DEFAULT_LOCUS_API_URL: &str = "https://api.paywithlocus.com";
pub const DEFAULT_LOCUS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct LocusConfig {
    pub base_url: String,
    /// The sending wallet. When unset, requests go to `/v1/wallets/null/send` and Locus rejects them.
    pub wallet_id: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl Default for LocusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCUS_API_URL.to_string(),
            wallet_id: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_LOCUS_TIMEOUT_SECS),
        }
    }
}

impl LocusConfig {
    pub fn new_from_env_or_default() -> Self {
        let base_url = optional_env("LOCUS_API_URL").unwrap_or_else(|| DEFAULT_LOCUS_API_URL.to_string());
        let wallet_id = optional_env("LOCUS_WALLET_ID");
        if wallet_id.is_none() {
            warn!("🪛️ LOCUS_WALLET_ID is not set. Pickup settlements will fail.");
        }
        let api_key = optional_env("LOCUS_API_KEY").map(Secret::new);
        if api_key.is_none() {
            warn!("🪛️ LOCUS_API_KEY is not set. Requests to Locus will be unauthenticated.");
        }
        let timeout = Duration::from_secs(env_or_default("LOCUS_TIMEOUT_SECS", DEFAULT_LOCUS_TIMEOUT_SECS));
        Self { base_url, wallet_id, api_key, timeout }
    }
}
