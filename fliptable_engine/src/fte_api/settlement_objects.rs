use ftb_common::{Usd, USDC_CURRENCY_CODE};
use serde::{Deserialize, Serialize};

use crate::market_types::TicketCode;

/// Transaction id reported when the provider accepts a transfer but does not say what it was called.
pub const DEMO_TRANSACTION_ID: &str = "tx_demo_123";
pub const DEFAULT_MEMO_PREFIX: &str = "FlipTable";
/// Every pickup settles the same amount, whatever the clearing price.
pub const DEFAULT_SETTLEMENT_AMOUNT: Usd = Usd::from_cents(80);

/// The fixed terms on which pickups are paid out to the restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementTerms {
    pub amount: Usd,
    pub currency: String,
    /// The restaurant's wallet address. If it is not configured the transfer is still attempted with no recipient and
    /// the provider is left to reject it.
    pub recipient: Option<String>,
    pub memo_prefix: String,
}

impl Default for SettlementTerms {
    fn default() -> Self {
        Self {
            amount: DEFAULT_SETTLEMENT_AMOUNT,
            currency: USDC_CURRENCY_CODE.to_string(),
            recipient: None,
            memo_prefix: DEFAULT_MEMO_PREFIX.to_string(),
        }
    }
}

impl SettlementTerms {
    pub fn instruction_for(&self, ticket: &TicketCode) -> TransferInstruction {
        TransferInstruction {
            recipient: self.recipient.clone(),
            amount: self.amount.to_decimal_string(),
            currency: self.currency.clone(),
            memo: format!("{}-{ticket}", self.memo_prefix),
        }
    }
}

/// A request to move funds to the restaurant. This is also the JSON body sent to the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    pub recipient: Option<String>,
    pub amount: String,
    pub currency: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub ticket_code: TicketCode,
    pub transaction_id: String,
    pub amount: String,
}
