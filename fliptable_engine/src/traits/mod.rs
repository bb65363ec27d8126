//! Extension points that external providers implement in order to plug into the engine.
mod wallet_transfers;

pub use wallet_transfers::{SettlementError, WalletTransfers};
