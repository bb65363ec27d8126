mod usd;

pub mod helpers;
pub mod op;
mod secret;

pub use secret::Secret;
pub use usd::{Usd, UsdConversionError, USDC_CURRENCY_CODE};
