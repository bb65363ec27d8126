use cucumber::{given, then, when};
use fliptable_engine::{allocate, market_types::InventoryLine, MarketContext};
use ftb_common::Usd;

use crate::{
    cucumber::AllocationWorld,
    support::{bid, repo_data_dir},
};

fn unquote(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}

fn usd(s: &str) -> Usd {
    unquote(s).parse().expect("Not a valid dollar amount")
}

#[given("the demo market data")]
async fn demo_market(world: &mut AllocationWorld) {
    let (market, report) = MarketContext::load_from_dir(repo_data_dir());
    assert!(!report.used_fallback(), "Demo market data could not be loaded");
    world.bids = market.bids().to_vec();
    world.inventory = market.restaurants()[0].inventory.clone();
}

#[given("an empty bid pool")]
async fn empty_pool(world: &mut AllocationWorld) {
    world.bids.clear();
}

#[given(expr = "a bid pool with amounts {string}")]
async fn bid_pool(world: &mut AllocationWorld, amounts: String) {
    world.bids = unquote(&amounts)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, amount)| bid(&format!("usr_{:03}", i + 1), amount))
        .collect();
}

#[given(expr = "a restaurant with {int} units of {string}")]
async fn inventory_line(world: &mut AllocationWorld, quantity: usize, item: String) {
    world.inventory.push(InventoryLine::new(unquote(&item), quantity, Usd::from_dollars(18)));
}

#[given(expr = "the {word} refund policy")]
async fn refund_policy(world: &mut AllocationWorld, policy: String) {
    world.policy = policy.parse().expect("Unknown refund policy");
}

#[when(expr = "I allocate at a clearing price of {word}")]
async fn run_allocation(world: &mut AllocationWorld, price: String) {
    world.clearing_price = usd(&price);
    world.result = Some(allocate(&world.bids, &world.inventory, world.clearing_price, world.policy));
}

#[then(expr = "{int} buyers are matched")]
async fn matched_count(world: &mut AllocationWorld, count: usize) {
    assert_eq!(world.result().matched_count(), count);
}

#[then(expr = "{int} buyers are refunded")]
async fn refunded_count(world: &mut AllocationWorld, count: usize) {
    assert_eq!(world.result().refunded_count(), count);
}

#[then(expr = "the restaurant revenue is {word}")]
async fn revenue(world: &mut AllocationWorld, amount: String) {
    assert_eq!(world.result().revenue, usd(&amount));
}

#[then(expr = "the total buyer savings is {word}")]
async fn savings(world: &mut AllocationWorld, amount: String) {
    assert_eq!(world.result().total_savings, usd(&amount));
}

#[then("no matched buyer bid less than the clearing price")]
async fn all_matched_can_pay(world: &mut AllocationWorld) {
    let price = world.clearing_price;
    for m in &world.result().matched {
        assert!(m.original_bid >= price, "{} bid {} which is below {price}", m.user_id, m.original_bid);
    }
}

#[then("matched bids never increase")]
async fn matched_in_bid_order(world: &mut AllocationWorld) {
    let matched = &world.result().matched;
    assert!(matched.windows(2).all(|w| w[0].original_bid >= w[1].original_bid), "Matched bids are out of order");
}

#[then(expr = "the ticket codes run from {word} to {word}")]
async fn ticket_range(world: &mut AllocationWorld, first: String, last: String) {
    let matched = &world.result().matched;
    assert_eq!(matched.first().map(|m| m.ticket_code.to_string()), Some(first));
    assert_eq!(matched.last().map(|m| m.ticket_code.to_string()), Some(last));
}

#[then(expr = "buyer {word} receives a {string}")]
async fn buyer_receives(world: &mut AllocationWorld, user_id: String, item: String) {
    let m = world.result().matched.iter().find(|m| m.user_id == user_id).expect("Buyer was not matched");
    assert_eq!(m.item, unquote(&item));
}

#[then(expr = "buyer {word} is refunded")]
async fn buyer_refunded(world: &mut AllocationWorld, user_id: String) {
    assert!(world.result().refunded.iter().any(|b| b.user_id == user_id), "{user_id} was not refunded");
}

#[then(expr = "buyer {word} is not refunded")]
async fn buyer_not_refunded(world: &mut AllocationWorld, user_id: String) {
    assert!(world.result().refunded.iter().all(|b| b.user_id != user_id), "{user_id} was refunded");
}
