//! Combat: dice and the attack rule

pub mod constants;
pub mod dice;
pub mod resolution;

pub use dice::{roll_battle, BattleRolls};
pub use resolution::{resolve_attack, validate_attack, AttackRejection, BattleOutcome, BattleReport};
