//! Mission evaluation - pure predicates over the registry

use crate::core::config::GameConfig;
use crate::core::types::{Faction, PlayerId};
use crate::map::{Registry, Territory};
use crate::mission::catalog::{Mission, MissionKind, PlayerMission};

/// The rule constants missions are checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRules {
    pub streak_length: usize,
    pub red_faction: Faction,
}

impl Default for MissionRules {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for MissionRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            streak_length: config.streak_length,
            red_faction: Faction::new(config.red_faction.clone()),
        }
    }
}

impl Mission {
    /// Whether the registry's current state completes this mission
    pub fn is_satisfied(&self, registry: &Registry, rules: &MissionRules) -> bool {
        evaluate(self.kind, registry.list(), rules)
    }
}

/// Dispatch on the mission kind
pub fn evaluate(kind: MissionKind, territories: &[Territory], rules: &MissionRules) -> bool {
    match kind {
        MissionKind::ConquerInARow => has_faction_streak(territories, rules.streak_length),
        MissionKind::EliminateRed => !territories.iter().any(|t| t.is_held_by(&rules.red_faction)),
        MissionKind::DominateAll => is_dominated(territories),
        MissionKind::HoldStrongholds | MissionKind::MixedColors => false,
    }
}

/// True if `length` consecutive slots share slot 0's faction
///
/// Storage order, not map adjacency. Any slot held by another faction
/// breaks the streak.
pub fn has_faction_streak(territories: &[Territory], length: usize) -> bool {
    let Some(first) = territories.first() else {
        return false;
    };

    let mut streak = 0usize;
    for territory in territories {
        if territory.faction == first.faction {
            streak += 1;
        } else {
            streak = 0;
        }

        if streak >= length {
            return true;
        }
    }

    false
}

/// True if every slot shares slot 0's faction
pub fn is_dominated(territories: &[Territory]) -> bool {
    match territories.split_first() {
        Some((first, rest)) => rest.iter().all(|t| t.faction == first.faction),
        None => false,
    }
}

/// Status of one player's mission at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionStatus {
    pub player: PlayerId,
    pub mission: Mission,
    pub satisfied: bool,
}

/// Evaluate every player's mission, in player order
pub fn evaluate_all(
    missions: &[PlayerMission],
    registry: &Registry,
    rules: &MissionRules,
) -> Vec<MissionStatus> {
    missions
        .iter()
        .map(|pm| {
            let satisfied = pm.mission.is_satisfied(registry, rules);
            tracing::debug!("Player {} mission {:?}: {}", pm.player, pm.mission.kind, satisfied);
            MissionStatus {
                player: pm.player,
                mission: pm.mission.clone(),
                satisfied,
            }
        })
        .collect()
}

/// First player (in player order) whose mission is complete
pub fn find_winner(
    missions: &[PlayerMission],
    registry: &Registry,
    rules: &MissionRules,
) -> Option<PlayerId> {
    missions
        .iter()
        .find(|pm| pm.mission.is_satisfied(registry, rules))
        .map(|pm| pm.player)
}
