//! A single territory on the map

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::core::types::{bounded, Faction};

/// Fewest troops a territory needs before it may launch an attack
pub const MIN_ATTACKING_TROOPS: u32 = 2;

/// A named slot held by one faction
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub faction: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, faction: impl Into<Faction>, troops: u32) -> Self {
        Self {
            name: name.into(),
            faction: faction.into(),
            troops,
        }
    }

    /// Whether this territory has enough troops to attack
    ///
    /// A territory with 0 or 1 troops is inert: it can still be conquered.
    pub fn can_attack(&self) -> bool {
        self.troops >= MIN_ATTACKING_TROOPS
    }

    pub fn is_held_by(&self, faction: &Faction) -> bool {
        &self.faction == faction
    }
}

/// Territory name as typed: trimmed, non-empty, within the configured limit
pub fn parse_name(raw: &str, config: &GameConfig) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(WarError::InvalidInput("the name cannot be empty".into()));
    }
    bounded(name, config.max_name_len, config.overflow, "Territory name")
}

/// Faction label as typed: only the first word counts
pub fn parse_faction(raw: &str, config: &GameConfig) -> Result<Faction> {
    let label = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| WarError::InvalidInput("the faction cannot be empty".into()))?;
    bounded(label, config.max_faction_len, config.overflow, "Faction").map(Faction::from)
}
