//! Mission catalog and per-player assignment

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::PlayerId;

/// Every kind of mission the game knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// A run of same-faction territories in registry order
    ConquerInARow,
    /// The red faction holds no territory
    EliminateRed,
    /// One faction holds the whole map
    DominateAll,
    /// Catalogued but never satisfied
    HoldStrongholds,
    /// Catalogued but never satisfied
    MixedColors,
}

impl MissionKind {
    pub const ALL: [MissionKind; 5] = [
        MissionKind::ConquerInARow,
        MissionKind::EliminateRed,
        MissionKind::DominateAll,
        MissionKind::HoldStrongholds,
        MissionKind::MixedColors,
    ];

    /// Canonical text shown to the player
    pub fn description(self) -> &'static str {
        match self {
            MissionKind::ConquerInARow => "Conquer 3 territories in a row",
            MissionKind::EliminateRed => "Eliminate all troops of faction 'red'",
            MissionKind::DominateAll => "Dominate all territories on the map",
            MissionKind::HoldStrongholds => "Hold at least 2 territories with more than 10 troops",
            MissionKind::MixedColors => "Own territories of different colors",
        }
    }

    /// Whether an evaluator exists for this mission
    ///
    /// The last two catalog entries have no win condition and can never be
    /// completed. They stay in the draw so the odds match the catalog.
    pub fn is_scored(self) -> bool {
        !matches!(self, MissionKind::HoldStrongholds | MissionKind::MixedColors)
    }
}

/// A mission as drawn for a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub kind: MissionKind,
    pub description: String,
}

impl Mission {
    pub fn new(kind: MissionKind) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// The fixed list missions are drawn from
#[derive(Debug, Clone)]
pub struct MissionCatalog {
    missions: Vec<Mission>,
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}

impl MissionCatalog {
    /// The five canonical missions, in catalog order
    pub fn canonical() -> Self {
        Self {
            missions: MissionKind::ALL.into_iter().map(Mission::new).collect(),
        }
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Draw one mission uniformly at random
    pub fn assign<R: Rng + ?Sized>(&self, rng: &mut R) -> Mission {
        let index = rng.gen_range(0..self.missions.len());
        self.missions[index].clone()
    }
}

/// A player's secret mission, fixed for the whole game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMission {
    pub player: PlayerId,
    pub mission: Mission,
}

/// Draw one mission per player, independently; repeats are allowed
pub fn assign_missions<R: Rng + ?Sized>(
    catalog: &MissionCatalog,
    players: usize,
    rng: &mut R,
) -> Vec<PlayerMission> {
    (1..=players)
        .map(|player| {
            let mission = catalog.assign(rng);
            tracing::debug!("Player {} drew mission {:?}", player, mission.kind);
            PlayerMission { player, mission }
        })
        .collect()
}
