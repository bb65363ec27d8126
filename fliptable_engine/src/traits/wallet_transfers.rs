use thiserror::Error;

use crate::settlement_objects::TransferInstruction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// The provider answered, but refused the transfer. `body` is the provider's response, verbatim.
    #[error("The wallet provider rejected the transfer ({status}). {body}")]
    Rejected { status: u16, body: String },
    /// The provider could not be reached, timed out, or the request could not be built.
    #[error("Could not reach the wallet provider. {0}")]
    Transport(String),
    #[error("Invalid settlement configuration. {0}")]
    Configuration(String),
}

/// A wallet service that can push funds to another wallet.
///
/// Implementations make exactly one attempt per call. There are no retries, so a failed call means the transfer was
/// not made.
#[allow(async_fn_in_trait)]
pub trait WalletTransfers {
    /// Submits the transfer and, if the provider accepts it, returns the provider's response body unmodified.
    async fn send_transfer(&self, transfer: &TransferInstruction) -> Result<String, SettlementError>;
}
