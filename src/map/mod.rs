//! The game map: territories and the registry that holds them

pub mod registry;
pub mod territory;

pub use registry::Registry;
pub use territory::{parse_faction, parse_name, Territory, MIN_ATTACKING_TROOPS};
