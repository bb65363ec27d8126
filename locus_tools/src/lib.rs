//! A minimal client for the Locus wallet API. Only the single endpoint FlipTable needs, sending funds from the
//! configured wallet, is covered.
mod api;
mod config;
mod error;

pub use api::LocusApi;
pub use config::{LocusConfig, DEFAULT_LOCUS_API_URL, DEFAULT_LOCUS_TIMEOUT_SECS};
pub use error::LocusApiError;
