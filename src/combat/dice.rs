//! Dice for a single battle
//!
//! Rolling and resolving are separate steps: the session draws a
//! [`BattleRolls`] from its RNG, then hands it to the resolver. Tests skip
//! the RNG and build the rolls they need.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One die per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRolls {
    pub attacker: u8,
    pub defender: u8,
}

impl BattleRolls {
    pub fn new(attacker: u8, defender: u8) -> Self {
        Self { attacker, defender }
    }

    /// The attacker needs a strictly higher roll; ties hold for the defender
    pub fn attacker_wins(&self) -> bool {
        self.attacker > self.defender
    }
}

/// Roll both dice, each uniform in `1..=sides`
pub fn roll_battle<R: Rng + ?Sized>(rng: &mut R, sides: u8) -> BattleRolls {
    let sides = sides.max(1);
    let rolls = BattleRolls {
        attacker: rng.gen_range(1..=sides),
        defender: rng.gen_range(1..=sides),
    };
    tracing::debug!("Rolled attacker {} vs defender {}", rolls.attacker, rolls.defender);
    rolls
}
