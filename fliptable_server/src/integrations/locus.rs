//! Connects the engine's [`WalletTransfers`] seam to the Locus wallet API.
use fliptable_engine::{settlement_objects::TransferInstruction, SettlementError, WalletTransfers};
use locus_tools::{LocusApi, LocusApiError};
use log::*;

#[derive(Debug, Clone)]
pub struct LocusWallet {
    api: LocusApi,
}

impl LocusWallet {
    pub fn new(api: LocusApi) -> Self {
        Self { api }
    }
}

impl WalletTransfers for LocusWallet {
    async fn send_transfer(&self, transfer: &TransferInstruction) -> Result<String, SettlementError> {
        trace!("💸️ Sending {} {} to Locus. Memo: {}", transfer.amount, transfer.currency, transfer.memo);
        self.api.send(transfer).await.map_err(settlement_error)
    }
}

fn settlement_error(e: LocusApiError) -> SettlementError {
    match e {
        LocusApiError::QueryError { status, message } => SettlementError::Rejected { status, body: message },
        LocusApiError::RestResponseError(s) => SettlementError::Transport(s),
        LocusApiError::Initialization(s) => SettlementError::Configuration(s),
    }
}
