use cucumber::World;
use fliptable_engine::{
    market_types::{Bid, InventoryLine},
    AllocationResult,
    RefundPolicy,
};
use ftb_common::Usd;

#[derive(Debug, Default, World)]
pub struct AllocationWorld {
    pub bids: Vec<Bid>,
    pub inventory: Vec<InventoryLine>,
    pub policy: RefundPolicy,
    pub clearing_price: Usd,
    pub result: Option<AllocationResult>,
}

impl AllocationWorld {
    pub fn result(&self) -> &AllocationResult {
        self.result.as_ref().expect("No allocation has been run in this scenario")
    }
}
