//! # FlipTable engine public API
//!
//! * [`market_api`] answers read-only queries over the loaded [`MarketContext`](crate::MarketContext): the escrow pool
//!   summary, the restaurant list and the allocation for the configured clearing price.
//! * [`settlement_api`] turns a pickup confirmation into a single wallet transfer via a
//!   [`WalletTransfers`](crate::WalletTransfers) provider.
//!
//! The `*_objects` submodules hold the request and response types for each API.
pub mod errors;
pub mod market_api;
pub mod market_objects;
pub mod settlement_api;
pub mod settlement_objects;
