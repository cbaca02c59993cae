pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, OverflowPolicy};
pub use error::{Result, WarError};
pub use types::{Faction, PlayerId};
