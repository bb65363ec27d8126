use ftb_common::Usd;
use serde::{Deserialize, Serialize};

use crate::{
    allocator::AllocationResult,
    market_types::{Bid, Restaurant},
};

/// Pounds of food kept out of the bin for each unit sold.
pub const FOOD_SAVED_LBS_PER_UNIT: f64 = 1.0;

/// Aggregate view of the escrow pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub buyer_count: usize,
    pub total_escrowed: Usd,
    /// Mean bid, rounded to the nearest cent. Zero for an empty pool.
    pub avg_bid: Usd,
    pub users: Vec<Bid>,
}

impl PoolSummary {
    pub fn from_bids(bids: &[Bid]) -> Self {
        let total_escrowed = bids.iter().map(|b| b.amount_escrowed).sum::<Usd>();
        let avg_bid = i64::try_from(bids.len())
            .ok()
            .and_then(|n| total_escrowed.checked_div_rounded(n))
            .unwrap_or_default();
        Self { buyer_count: bids.len(), total_escrowed, avg_bid, users: bids.to_vec() }
    }
}

/// The outcome of clearing one restaurant's inventory against the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResults {
    pub restaurant: Restaurant,
    pub allocation: AllocationResult,
}

impl MatchResults {
    #[allow(clippy::cast_precision_loss)]
    pub fn food_saved_lbs(&self) -> f64 {
        self.allocation.matched_count() as f64 * FOOD_SAVED_LBS_PER_UNIT
    }
}
