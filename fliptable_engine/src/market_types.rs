//! Data types for the buyer pool and restaurant inventory.
//!
//! These mirror the JSON documents the market is loaded from, so field names are part of the public API and must not
//! change without also changing the data files.
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use ftb_common::Usd;
use serde::{Deserialize, Serialize};

/// First ticket number handed out in an allocation round.
pub const FIRST_TICKET_NUMBER: usize = 1000;
pub const TICKET_PREFIX: &str = "FLIP";

//--------------------------------------        Bid          ---------------------------------------------------------
/// A buyer's escrowed commitment. Bids are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub user_id: String,
    pub name: String,
    pub amount_escrowed: Usd,
    #[serde(default)]
    pub food_ordered: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub pickup_window: String,
}

impl Bid {
    pub fn new<S: Into<String>>(user_id: S, name: S, amount_escrowed: Usd) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            amount_escrowed,
            food_ordered: String::default(),
            location: String::default(),
            pickup_window: String::default(),
        }
    }

    pub fn with_food_ordered<S: Into<String>>(mut self, food: S) -> Self {
        self.food_ordered = food.into();
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_pickup_window<S: Into<String>>(mut self, window: S) -> Self {
        self.pickup_window = window.into();
        self
    }
}

//--------------------------------------   InventoryLine     ---------------------------------------------------------
/// A line of stock on a restaurant's menu. Each line stands for `quantity` identical units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub item: String,
    pub quantity: usize,
    pub original_price: Usd,
}

impl InventoryLine {
    pub fn new<S: Into<String>>(item: S, quantity: usize, original_price: Usd) -> Self {
        Self { item: item.into(), quantity, original_price }
    }
}

//--------------------------------------     Restaurant      ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub inventory: Vec<InventoryLine>,
}

impl Restaurant {
    /// The number of individually sellable units across all inventory lines.
    pub fn unit_count(&self) -> usize {
        crate::allocator::total_units(&self.inventory)
    }
}

//--------------------------------------     TicketCode      ---------------------------------------------------------
/// The code a buyer presents at pickup, e.g. `FLIP-1003`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketCode(pub String);

impl TicketCode {
    /// The ticket issued to the buyer at `position` (zero-based) in the matched list.
    pub fn for_position(position: usize) -> Self {
        Self(format!("{TICKET_PREFIX}-{}", FIRST_TICKET_NUMBER + position))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for TicketCode {
    fn default() -> Self {
        Self::for_position(0)
    }
}

impl Display for TicketCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TicketCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for TicketCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err("Ticket code cannot be empty".to_string())
        } else {
            Ok(Self(s.to_string()))
        }
    }
}
