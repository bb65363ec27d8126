use fliptable_engine::{settlement_objects::TransferInstruction, SettlementError, WalletTransfers};
use mockall::mock;

mock! {
    pub Wallet {}
    impl WalletTransfers for Wallet {
        async fn send_transfer(&self, transfer: &TransferInstruction) -> Result<String, SettlementError>;
    }
}
