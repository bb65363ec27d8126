//! FlipTable Engine
//!
//! The FlipTable engine clears a restaurant's end-of-day surplus against a pool of buyers who have escrowed funds in
//! advance. Everything that is not HTTP plumbing lives here:
//!
//! 1. The [`allocator`]. Given the bid pool, a restaurant's inventory and a clearing price, it decides who gets a unit,
//!    who gets refunded and what the sale is worth. This is a pure function with no failure modes.
//! 2. Market data ([`market_types`] and [`data_loader`]). Bids and restaurants are read once from JSON files at
//!    startup into a read-only [`MarketContext`]. Missing or malformed files never stop the process; the built-in
//!    [`fallback_data`] is used instead.
//! 3. The public API ([`mod@fte_api`]). [`MarketApi`] answers queries over the market context, and [`SettlementApi`]
//!    forwards a fixed-amount transfer to a wallet provider when a buyer picks up their order. Wallet providers
//!    implement the [`WalletTransfers`] trait.
pub mod allocator;
pub mod data_loader;
pub mod fallback_data;
mod fte_api;
pub mod helpers;
pub mod market_types;
pub mod traits;

pub use allocator::{allocate, AllocationResult, Match, RefundPolicy};
pub use data_loader::{DataLoadError, DataSource, LoadOutcome, MarketContext, MarketLoadReport};
pub use fte_api::{
    errors::MarketApiError,
    market_api::MarketApi,
    market_objects,
    settlement_api::SettlementApi,
    settlement_objects,
};
pub use traits::{SettlementError, WalletTransfers};
