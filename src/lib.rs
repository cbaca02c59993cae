//! Territory War - turn-based territory conquest with dice combat and secret missions

pub mod combat;
pub mod console;
pub mod core;
pub mod game;
pub mod map;
pub mod mission;
