//! Loads the market (bid pool and restaurants) from JSON files.
//!
//! Loading never fails. If a file is missing or cannot be parsed, the built-in [`fallback_data`](crate::fallback_data)
//! is used in its place, and the returned [`DataSource`] records why.
use std::{
    fmt::{Display, Formatter},
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    fallback_data::{default_escrow_pool, default_restaurants},
    market_types::{Bid, Restaurant},
};

pub const ESCROW_POOL_FILE: &str = "escrow_pool.json";
pub const RESTAURANTS_FILE: &str = "restaurants.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLoadError {
    #[error("{0} does not exist")]
    FileNotFound(String),
    #[error("Could not read {path}. {reason}")]
    Unreadable { path: String, reason: String },
    #[error("{path} does not contain valid data. {reason}")]
    Malformed { path: String, reason: String },
}

/// Where a piece of market data came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Fallback(DataLoadError),
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Fallback(e) => write!(f, "built-in fallback data ({e})"),
        }
    }
}

/// A loaded value paired with its [`DataSource`].
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> LoadOutcome<T> {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, DataSource::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Reads and deserializes a JSON document.
pub fn try_load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, DataLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound(display.clone()),
        _ => DataLoadError::Unreadable { path: display.clone(), reason: e.to_string() },
    })?;
    serde_json::from_str(&contents).map_err(|e| DataLoadError::Malformed { path: display, reason: e.to_string() })
}

/// Loads a JSON array from `path`, or returns the value produced by `fallback` if that is not possible.
pub fn load_json_or_fallback<T, P, F>(path: P, fallback: F) -> LoadOutcome<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> Vec<T>,
{
    let path = path.as_ref();
    match try_load_json::<Vec<T>, _>(path) {
        Ok(value) => {
            info!("📦️ Loaded {} with {} entries", path.display(), value.len());
            LoadOutcome { value, source: DataSource::File(path.to_path_buf()) }
        },
        Err(e) => {
            warn!("📦️ Could not load {}, using fallback data. {e}", path.display());
            LoadOutcome { value: fallback(), source: DataSource::Fallback(e) }
        },
    }
}

//--------------------------------------   MarketContext     ---------------------------------------------------------
/// The bid pool and restaurant list, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketContext {
    bids: Vec<Bid>,
    restaurants: Vec<Restaurant>,
}

/// Records where each part of a [`MarketContext`] was loaded from.
#[derive(Debug, Clone)]
pub struct MarketLoadReport {
    pub bids: DataSource,
    pub restaurants: DataSource,
}

impl MarketLoadReport {
    pub fn used_fallback(&self) -> bool {
        matches!(self.bids, DataSource::Fallback(_)) || matches!(self.restaurants, DataSource::Fallback(_))
    }
}

impl MarketContext {
    pub fn new(bids: Vec<Bid>, restaurants: Vec<Restaurant>) -> Self {
        Self { bids, restaurants }
    }

    /// A context built entirely from the built-in demo data.
    pub fn fallback() -> Self {
        Self::new(default_escrow_pool(), default_restaurants())
    }

    /// Loads `escrow_pool.json` and `restaurants.json` from `dir`. Each file falls back independently.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> (Self, MarketLoadReport) {
        let dir = dir.as_ref();
        let bids = load_json_or_fallback(dir.join(ESCROW_POOL_FILE), default_escrow_pool);
        let restaurants = load_json_or_fallback(dir.join(RESTAURANTS_FILE), default_restaurants);
        let report = MarketLoadReport { bids: bids.source, restaurants: restaurants.source };
        (Self::new(bids.value, restaurants.value), report)
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }
}
