//! Built-in market data, used when the data files cannot be read.
use ftb_common::Usd;

use crate::market_types::{Bid, InventoryLine, Restaurant};

const DEFAULT_FOOD: &str = "pizza";
const DEFAULT_LOCATION: &str = "Mission District";
const DEFAULT_PICKUP_WINDOW: &str = "7-9 PM";

const DEFAULT_BIDS: [(&str, &str, i64); 23] = [
    ("usr_001", "Sarah M.", 1150),
    ("usr_002", "Mike T.", 850),
    ("usr_003", "Jane K.", 900),
    ("usr_004", "Alex P.", 800),
    ("usr_005", "Chris L.", 950),
    ("usr_006", "Jordan T.", 900),
    ("usr_007", "Casey W.", 1000),
    ("usr_008", "Morgan F.", 850),
    ("usr_009", "Riley H.", 1150),
    ("usr_010", "Quinn B.", 750),
    ("usr_011", "Dakota S.", 1100),
    ("usr_012", "Avery M.", 900),
    ("usr_013", "Skyler D.", 1000),
    ("usr_014", "River C.", 800),
    ("usr_015", "Phoenix L.", 600),
    ("usr_016", "Sage K.", 1050),
    ("usr_017", "Rowan P.", 900),
    ("usr_018", "Ember J.", 700),
    ("usr_019", "Aspen G.", 1000),
    ("usr_020", "Wren V.", 850),
    ("usr_021", "Kai N.", 650),
    ("usr_022", "Ellis R.", 1100),
    ("usr_023", "Finley Y.", 750),
];

/// The demo escrow pool: 23 pizza buyers in the Mission District.
pub fn default_escrow_pool() -> Vec<Bid> {
    DEFAULT_BIDS
        .iter()
        .map(|&(id, name, cents)| {
            Bid::new(id, name, Usd::from_cents(cents))
                .with_food_ordered(DEFAULT_FOOD)
                .with_location(DEFAULT_LOCATION)
                .with_pickup_window(DEFAULT_PICKUP_WINDOW)
        })
        .collect()
}

/// The demo restaurant list: a single pizzeria with 14 pizzas left over.
pub fn default_restaurants() -> Vec<Restaurant> {
    vec![Restaurant {
        restaurant_id: "rest_001".into(),
        name: "Mario's Pizza".into(),
        phone: "+1-415-555-0123".into(),
        address: "742 Valencia St, San Francisco, CA 94110".into(),
        contact: "Tony".into(),
        inventory: vec![
            InventoryLine::new("Margherita Pizza", 8, Usd::from_dollars(18)),
            InventoryLine::new("Pepperoni Pizza", 6, Usd::from_dollars(20)),
        ],
    }]
}
