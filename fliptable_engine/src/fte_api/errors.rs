use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketApiError {
    #[error("No restaurants are available")]
    NoRestaurants,
    #[error("Restaurant {0} does not exist")]
    RestaurantNotFound(String),
}
