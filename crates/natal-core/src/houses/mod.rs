pub mod locator;
pub mod types;

pub use locator::{describe_houses, locate_house, FALLBACK_HOUSE};
pub use types::{HouseCusps, HouseReport};
