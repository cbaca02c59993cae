//! Game configuration with documented constants
//!
//! Every tunable number of the game lives here. None of these change the
//! rules themselves; they pin down the limits the rules are written against.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::combat::constants::DEFAULT_DICE_SIDES;
use crate::core::error::{Result, WarError};

/// What to do with a name or faction label longer than its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Keep the first `limit` characters
    #[default]
    Truncate,
    /// Refuse the value and ask again
    Reject,
}

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === TERRITORY REGISTRY ===
    /// Maximum territory name length, in characters
    pub max_name_len: usize,

    /// Maximum faction label length, in characters
    pub max_faction_len: usize,

    /// How over-long names and labels are handled
    pub overflow: OverflowPolicy,

    // === COMBAT ===
    /// Faces on each battle die
    ///
    /// Both sides roll one die in `1..=dice_sides`. Ties go to the defender.
    pub dice_sides: u8,

    // === MISSIONS ===
    /// Consecutive same-faction slots needed for "Conquer 3 territories in a row"
    pub streak_length: usize,

    /// Faction label that "Eliminate all troops of faction 'red'" targets
    pub red_faction: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_name_len: 29,
            max_faction_len: 9,
            overflow: OverflowPolicy::Truncate,

            dice_sides: DEFAULT_DICE_SIDES,

            streak_length: 3,
            red_faction: "vermelha".to_string(),
        }
    }
}

impl GameConfig {
    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 || self.max_faction_len == 0 {
            return Err(WarError::Config(
                "name and faction limits must be at least 1 character".into(),
            ));
        }

        if self.dice_sides < 2 {
            return Err(WarError::Config(format!(
                "dice_sides ({}) must be at least 2",
                self.dice_sides
            )));
        }

        if self.streak_length < 2 {
            return Err(WarError::Config(format!(
                "streak_length ({}) must be at least 2",
                self.streak_length
            )));
        }

        if self.red_faction.trim().is_empty() {
            return Err(WarError::Config("red_faction must not be empty".into()));
        }

        Ok(())
    }
}
