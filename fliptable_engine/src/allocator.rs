//! # Allocator
//!
//! Clears a bid pool against a restaurant's inventory at a single clearing price.
//!
//! 1. Bids with `amount_escrowed >= clearing_price` are *eligible*.
//! 2. Eligible bids are ranked by amount, highest first. The sort is stable, so equal bids keep their pool order.
//! 3. Inventory lines are expanded into individual units, in input order.
//! 4. The top `min(eligible, units)` bids are matched. The i-th matched bid receives the i-th unit and ticket
//!    `FLIP-(1000 + i)`, and pays the clearing price. The difference between the escrowed amount and the clearing price
//!    is the buyer's saving.
//! 5. Everyone else is refunded, according to the [`RefundPolicy`].
//!
//! Allocation never fails and never mutates its inputs. Identical inputs always give identical outputs.
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use ftb_common::Usd;
use log::*;
use serde::{Deserialize, Serialize};

use crate::market_types::{Bid, InventoryLine, TicketCode};

/// Item label used if a matched buyer has no unit to receive. `min(eligible, units)` makes this unreachable, but the
/// allocator must not panic on it.
pub const FALLBACK_ITEM_LABEL: &str = "Pizza";

/// Which bids are reported as refunded after an allocation round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundPolicy {
    /// Every bid in the pool that did not win a unit, in pool order. Matched and refunded bids partition the pool.
    #[default]
    Unmatched,
    /// The bids in the pool past position `unit_count`, regardless of which bids were matched. This reproduces the
    /// behaviour of the first FlipTable release. Because it ignores the bid ranking it can report a matched buyer as
    /// refunded, or omit an unmatched one.
    PositionalTail,
}

impl Display for RefundPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmatched => f.write_str("unmatched"),
            Self::PositionalTail => f.write_str("positional"),
        }
    }
}

impl FromStr for RefundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unmatched" => Ok(Self::Unmatched),
            "positional" | "positional_tail" | "legacy" => Ok(Self::PositionalTail),
            other => Err(format!("'{other}' is not a refund policy. Use 'unmatched' or 'positional'.")),
        }
    }
}

/// A buyer that won a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub user_id: String,
    pub name: String,
    pub item: String,
    pub price: Usd,
    pub original_bid: Usd,
    pub savings: Usd,
    pub ticket_code: TicketCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub matched: Vec<Match>,
    pub refunded: Vec<Bid>,
    pub clearing_price: Usd,
    pub revenue: Usd,
    pub total_savings: Usd,
    pub eligible_count: usize,
    pub unit_count: usize,
}

impl AllocationResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn refunded_count(&self) -> usize {
        self.refunded.len()
    }
}

/// Expands inventory lines into one label per sellable unit, preserving line order. The iterator is lazy, so callers
/// should `take` only the units they need.
pub fn expand_inventory(inventory: &[InventoryLine]) -> impl Iterator<Item = &str> {
    inventory.iter().flat_map(|line| std::iter::repeat(line.item.as_str()).take(line.quantity))
}

/// Total number of units across all lines. Saturates rather than overflowing on absurd quantities.
pub fn total_units(inventory: &[InventoryLine]) -> usize {
    inventory.iter().fold(0usize, |acc, line| acc.saturating_add(line.quantity))
}

/// Runs one allocation round. See the [module documentation](self) for the rules.
pub fn allocate(
    bids: &[Bid],
    inventory: &[InventoryLine],
    clearing_price: Usd,
    policy: RefundPolicy,
) -> AllocationResult {
    let unit_count = total_units(inventory);
    // Pool positions are kept alongside each bid so that refunds can be computed by identity, not by value.
    let mut eligible =
        bids.iter().enumerate().filter(|(_, bid)| bid.amount_escrowed >= clearing_price).collect::<Vec<_>>();
    // `sort_by` is stable, so ties keep pool order
    eligible.sort_by(|(_, a), (_, b)| b.amount_escrowed.cmp(&a.amount_escrowed));
    let match_count = eligible.len().min(unit_count);
    trace!(
        "⚖️ {} bids, {} eligible at {clearing_price}, {unit_count} units. Matching {match_count}",
        bids.len(),
        eligible.len()
    );
    let units = expand_inventory(inventory).take(match_count).collect::<Vec<&str>>();

    let winners = &eligible[..match_count];
    let matched = winners
        .iter()
        .enumerate()
        .map(|(i, (_, bid))| {
            let item = units.get(i).copied().unwrap_or(FALLBACK_ITEM_LABEL);
            Match {
                user_id: bid.user_id.clone(),
                name: bid.name.clone(),
                item: item.to_string(),
                price: clearing_price,
                original_bid: bid.amount_escrowed,
                savings: bid.amount_escrowed - clearing_price,
                ticket_code: TicketCode::for_position(i),
            }
        })
        .collect::<Vec<Match>>();

    let refunded: Vec<Bid> = match policy {
        RefundPolicy::Unmatched => {
            let mut won = vec![false; bids.len()];
            winners.iter().for_each(|(pos, _)| won[*pos] = true);
            bids.iter().zip(won).filter(|(_, won)| !won).map(|(bid, _)| bid.clone()).collect()
        },
        RefundPolicy::PositionalTail => bids.iter().skip(unit_count).cloned().collect(),
    };

    #[allow(clippy::cast_possible_wrap)]
    let revenue = clearing_price * matched.len() as i64;
    let total_savings = matched.iter().map(|m| m.savings).sum();
    debug!(
        "⚖️ Allocation complete. {} matched, {} refunded ({policy}), revenue {revenue}, buyer savings {total_savings}",
        matched.len(),
        refunded.len()
    );
    AllocationResult {
        matched,
        refunded,
        clearing_price,
        revenue,
        total_savings,
        eligible_count: eligible.len(),
        unit_count,
    }
}
