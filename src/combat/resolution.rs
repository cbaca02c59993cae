//! Attack resolution
//!
//! Given the dice, an attack is deterministic. Rejected attacks leave both
//! territories untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combat::constants::{CONQUEST_SPLIT, REPULSE_LOSS};
use crate::combat::dice::BattleRolls;
use crate::core::types::Faction;
use crate::map::Territory;

/// Why an attack was refused before any die was read
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRejection {
    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("attacker and defender belong to the same faction")]
    SameFaction,

    #[error("the attacker needs at least 2 troops to attack")]
    InsufficientTroops,
}

/// Outcome of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Defender's territory changed hands
    AttackerVictory,
    /// Defender held (including ties); attacker lost a troop
    DefenderHeld,
}

/// What happened in one attack, for narration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub attacker_name: String,
    pub defender_name: String,
    pub attacker_faction: Faction,
    pub rolls: BattleRolls,
    pub outcome: BattleOutcome,
    /// Troops left on the attacking territory
    pub attacker_troops: u32,
    /// Troops left on the defending territory
    pub defender_troops: u32,
}

/// Check whether `attacker` may attack `defender` at all
pub fn validate_attack(attacker: &Territory, defender: &Territory) -> Result<(), AttackRejection> {
    if attacker.faction == defender.faction {
        return Err(AttackRejection::SameFaction);
    }
    if !attacker.can_attack() {
        return Err(AttackRejection::InsufficientTroops);
    }
    Ok(())
}

/// Resolve one attack with the given dice, mutating both territories
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rolls: BattleRolls,
) -> Result<BattleReport, AttackRejection> {
    validate_attack(attacker, defender)?;

    let outcome = if rolls.attacker_wins() {
        // Both sides read the attacker's pre-battle count
        let split = attacker.troops / CONQUEST_SPLIT;
        defender.faction = attacker.faction.clone();
        defender.troops = split;
        attacker.troops = split;
        BattleOutcome::AttackerVictory
    } else {
        attacker.troops = attacker.troops.saturating_sub(REPULSE_LOSS);
        BattleOutcome::DefenderHeld
    };

    tracing::debug!(
        "{} attacked {}: {:?} ({} vs {})",
        attacker.name,
        defender.name,
        outcome,
        rolls.attacker,
        rolls.defender
    );

    Ok(BattleReport {
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
        attacker_faction: attacker.faction.clone(),
        rolls,
        outcome,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
    })
}
