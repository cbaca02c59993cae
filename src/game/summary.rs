//! End-of-game report

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::PlayerId;
use crate::map::Territory;
use crate::mission::PlayerMission;

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameOutcome {
    /// A player's mission was completed
    Victory { player: PlayerId },
    /// Players quit (or input ran out) before anyone won
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub outcome: GameOutcome,
    pub rounds: u32,
    pub territories: Vec<Territory>,
    pub missions: Vec<PlayerMission>,
}

impl GameSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the plain-text report
    pub fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "=== Game Summary (seed {}) ===", self.seed)?;
        match self.outcome {
            GameOutcome::Victory { player } => writeln!(out, "Winner: Player {}", player)?,
            GameOutcome::Abandoned => writeln!(out, "Winner: none")?,
        }
        writeln!(out, "Attack rounds: {}", self.rounds)?;
        for pm in &self.missions {
            writeln!(out, "Player {}: {}", pm.player, pm.mission)?;
        }
        for (i, t) in self.territories.iter().enumerate() {
            writeln!(out, "{:>3}. {} [{}] {} troops", i + 1, t.name, t.faction, t.troops)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f)
    }
}
