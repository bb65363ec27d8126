use std::{fmt::Debug, sync::Arc};

use ftb_common::Usd;
use log::*;

use crate::{
    allocator::{allocate, RefundPolicy},
    data_loader::MarketContext,
    market_objects::{MatchResults, PoolSummary},
    market_types::Restaurant,
    MarketApiError,
};

/// Read-only queries over the market.
///
/// The context is shared, never mutated, and allocations are recomputed on every call, so a `MarketApi` can be cloned
/// freely across server workers without any locking.
#[derive(Clone)]
pub struct MarketApi {
    market: Arc<MarketContext>,
    clearing_price: Usd,
    refund_policy: RefundPolicy,
    restaurant_id: Option<String>,
}

impl Debug for MarketApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MarketApi ({} bids, {} restaurants, clearing at {}, {} refunds)",
            self.market.bids().len(),
            self.market.restaurants().len(),
            self.clearing_price,
            self.refund_policy
        )
    }
}

impl MarketApi {
    pub fn new(market: Arc<MarketContext>, clearing_price: Usd) -> Self {
        Self { market, clearing_price, refund_policy: RefundPolicy::default(), restaurant_id: None }
    }

    pub fn with_refund_policy(mut self, refund_policy: RefundPolicy) -> Self {
        self.refund_policy = refund_policy;
        self
    }

    /// Select the restaurant whose inventory is cleared. With `None`, the first restaurant in the list is used.
    pub fn with_restaurant(mut self, restaurant_id: Option<String>) -> Self {
        self.restaurant_id = restaurant_id;
        self
    }

    pub fn clearing_price(&self) -> Usd {
        self.clearing_price
    }

    pub fn refund_policy(&self) -> RefundPolicy {
        self.refund_policy
    }

    pub fn market(&self) -> &MarketContext {
        &self.market
    }

    pub fn pool_summary(&self) -> PoolSummary {
        PoolSummary::from_bids(self.market.bids())
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        self.market.restaurants()
    }

    pub fn selected_restaurant(&self) -> Result<&Restaurant, MarketApiError> {
        let restaurants = self.market.restaurants();
        match &self.restaurant_id {
            Some(id) => restaurants
                .iter()
                .find(|r| &r.restaurant_id == id)
                .ok_or_else(|| MarketApiError::RestaurantNotFound(id.clone())),
            None => restaurants.first().ok_or(MarketApiError::NoRestaurants),
        }
    }

    /// Clears the selected restaurant's inventory against the full bid pool at the configured clearing price.
    pub fn match_results(&self) -> Result<MatchResults, MarketApiError> {
        let restaurant = self.selected_restaurant()?;
        trace!("⚖️ Clearing {} units from {}", restaurant.unit_count(), restaurant.name);
        let allocation =
            allocate(self.market.bids(), &restaurant.inventory, self.clearing_price, self.refund_policy);
        Ok(MatchResults { restaurant: restaurant.clone(), allocation })
    }
}
