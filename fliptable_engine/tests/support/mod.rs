#![allow(dead_code)]
use std::{
    fs,
    path::{Path, PathBuf},
};

use fliptable_engine::{
    data_loader::{ESCROW_POOL_FILE, RESTAURANTS_FILE},
    market_types::{Bid, InventoryLine, Restaurant},
};
use ftb_common::Usd;
use tempfile::TempDir;

/// The demo data set that ships with the repository.
pub fn repo_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("data")
}

/// Writes the two market files into a fresh temporary directory. The directory is removed when the handle drops.
pub fn market_dir(bids: &[Bid], restaurants: &[Restaurant]) -> TempDir {
    let dir = TempDir::new().expect("Could not create temporary market directory");
    let bids = serde_json::to_string_pretty(bids).expect("Could not serialize bids");
    let restaurants = serde_json::to_string_pretty(restaurants).expect("Could not serialize restaurants");
    fs::write(dir.path().join(ESCROW_POOL_FILE), bids).expect("Could not write bid pool");
    fs::write(dir.path().join(RESTAURANTS_FILE), restaurants).expect("Could not write restaurants");
    dir
}

pub fn bid(user_id: &str, amount: &str) -> Bid {
    Bid::new(user_id, user_id, amount.parse::<Usd>().expect("Invalid amount"))
}

pub fn restaurant(id: &str, lines: &[(&str, usize)]) -> Restaurant {
    Restaurant {
        restaurant_id: id.to_string(),
        name: format!("Restaurant {id}"),
        phone: String::default(),
        address: String::default(),
        contact: String::default(),
        inventory: lines.iter().map(|(item, qty)| InventoryLine::new(*item, *qty, Usd::from_dollars(15))).collect(),
    }
}
