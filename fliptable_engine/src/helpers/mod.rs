mod transaction_id;

pub use transaction_id::extract_transaction_id;
