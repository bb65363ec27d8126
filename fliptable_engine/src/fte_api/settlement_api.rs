use std::fmt::Debug;

use log::*;

use crate::{
    helpers::extract_transaction_id,
    market_types::TicketCode,
    settlement_objects::{SettlementTerms, TransferReceipt, DEMO_TRANSACTION_ID},
    traits::{SettlementError, WalletTransfers},
};

/// Pays the restaurant when a buyer picks up their order.
///
/// The settlement is a pass-through: it does not check the ticket against any allocation, and it always sends the
/// fixed amount in [`SettlementTerms`].
pub struct SettlementApi<W> {
    wallet: W,
    terms: SettlementTerms,
}

impl<W> Debug for SettlementApi<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SettlementApi ({} {} per pickup)", self.terms.amount, self.terms.currency)
    }
}

impl<W> SettlementApi<W> {
    pub fn new(wallet: W, terms: SettlementTerms) -> Self {
        Self { wallet, terms }
    }

    pub fn terms(&self) -> &SettlementTerms {
        &self.terms
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }
}

impl<W> SettlementApi<W>
where W: WalletTransfers
{
    pub async fn confirm_pickup(&self, ticket: &TicketCode) -> Result<TransferReceipt, SettlementError> {
        let transfer = self.terms.instruction_for(ticket);
        info!("💸️ Pickup confirmed for {ticket}. Sending {} {} to the restaurant", transfer.amount, transfer.currency);
        if transfer.recipient.is_none() {
            warn!("💸️ No restaurant wallet is configured. The transfer for {ticket} will most likely be rejected.");
        }
        let body = self.wallet.send_transfer(&transfer).await.map_err(|e| {
            warn!("💸️ Transfer for {ticket} failed. {e}");
            e
        })?;
        let transaction_id = extract_transaction_id(&body).unwrap_or_else(|| {
            debug!("💸️ No transaction id in the provider response. Using {DEMO_TRANSACTION_ID}");
            DEMO_TRANSACTION_ID.to_string()
        });
        info!("💸️ Transfer for {ticket} complete. Transaction id: {transaction_id}");
        Ok(TransferReceipt { ticket_code: ticket.clone(), transaction_id, amount: transfer.amount })
    }
}
