//! GameSession - the state of one game from setup to victory
//!
//! The session owns the registry, the players' missions and the single RNG
//! stream every die and mission draw comes from.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{roll_battle, BattleReport};
use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::core::types::PlayerId;
use crate::game::summary::{GameOutcome, GameSummary};
use crate::map::Registry;
use crate::mission::{
    assign_missions, evaluate_all, find_winner, MissionCatalog, MissionRules, MissionStatus,
    PlayerMission,
};

pub struct GameSession {
    pub config: GameConfig,
    pub registry: Registry,
    pub missions: Vec<PlayerMission>,
    rules: MissionRules,
    catalog: MissionCatalog,
    /// Random number generator (deterministic for a given seed)
    rng: ChaCha8Rng,
    seed: u64,
    /// Attack commands issued so far, valid or not
    rounds: u32,
    winner: Option<PlayerId>,
}

impl GameSession {
    pub fn new(config: GameConfig, registry: Registry, seed: u64) -> Self {
        let rules = MissionRules::from(&config);
        Self {
            config,
            registry,
            missions: Vec::new(),
            rules,
            catalog: MissionCatalog::canonical(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            rounds: 0,
            winner: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Draw a secret mission for each of `players` players
    pub fn assign_missions(&mut self, players: usize) -> Result<&[PlayerMission]> {
        if players == 0 {
            return Err(WarError::InvalidInput("the game needs at least one player".into()));
        }
        self.missions = assign_missions(&self.catalog, players, &mut self.rng);
        tracing::info!("Assigned missions to {} players", players);
        Ok(&self.missions)
    }

    /// Run one attack between 1-based territory indices
    ///
    /// Dice are only rolled once the attack is known to be legal, so a
    /// rejected attack never consumes randomness.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<BattleReport> {
        let from = self.registry.resolve_index(attacker)?;
        let to = self.registry.resolve_index(defender)?;
        self.registry.check_attack(from, to)?;

        let rolls = roll_battle(&mut self.rng, self.config.dice_sides);
        self.registry.attack(from, to, rolls)
    }

    /// Full attack command: the attack itself, then the victory check
    ///
    /// The check runs even when the attack was refused.
    pub fn play_attack(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> (Result<BattleReport>, Option<PlayerId>) {
        self.rounds += 1;
        let result = self.attack(attacker, defender);
        if let Err(e) = &result {
            tracing::warn!("Attack {} -> {} refused: {}", attacker, defender, e);
        }
        (result, self.check_victory())
    }

    /// Look for a player whose mission is complete and record the win
    pub fn check_victory(&mut self) -> Option<PlayerId> {
        if self.winner.is_none() {
            self.winner = find_winner(&self.missions, &self.registry, &self.rules);
            if let Some(player) = self.winner {
                tracing::info!(
                    "Player {} completed their mission after {} rounds",
                    player,
                    self.rounds
                );
            }
        }
        self.winner
    }

    /// Current status of every player's mission
    pub fn mission_statuses(&self) -> Vec<MissionStatus> {
        evaluate_all(&self.missions, &self.registry, &self.rules)
    }

    /// Snapshot for the closing report
    pub fn summary(&self) -> GameSummary {
        let outcome = match self.winner {
            Some(player) => GameOutcome::Victory { player },
            None => GameOutcome::Abandoned,
        };
        GameSummary {
            seed: self.seed,
            outcome,
            rounds: self.rounds,
            territories: self.registry.list().to_vec(),
            missions: self.missions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackRejection;
    use crate::map::Territory;
    use crate::mission::{Mission, MissionKind};

    fn session_with(territories: Vec<Territory>) -> GameSession {
        let registry = Registry::from_territories(territories).unwrap();
        GameSession::new(GameConfig::default(), registry, 42)
    }

    #[test]
    fn test_assign_missions_requires_players() {
        let mut session = session_with(vec![Territory::new("A", "azul", 3)]);
        assert!(session.assign_missions(0).is_err());
        assert_eq!(session.assign_missions(3).unwrap().len(), 3);
    }

    #[test]
    fn test_attack_with_bad_index_still_counts_round() {
        let mut session = session_with(vec![
            Territory::new("A", "azul", 3),
            Territory::new("B", "verde", 3),
        ]);
        let (result, winner) = session.play_attack(1, 5);
        assert!(matches!(result, Err(WarError::InvalidIndex { index: 5, len: 2 })));
        assert_eq!(winner, None);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn test_rejected_attack_consumes_no_dice() {
        let territories = vec![
            Territory::new("A", "azul", 1),
            Territory::new("B", "verde", 4),
            Territory::new("C", "azul", 4),
        ];
        let mut rejected_first = session_with(territories.clone());
        let mut direct = session_with(territories);

        let (result, _) = rejected_first.play_attack(1, 2);
        assert!(matches!(
            result,
            Err(WarError::InvalidAttack(AttackRejection::InsufficientTroops))
        ));

        let a = rejected_first.attack(3, 2).unwrap();
        let b = direct.attack(3, 2).unwrap();
        assert_eq!(a.rolls, b.rolls);
    }

    #[test]
    fn test_victory_detected_after_attack() {
        let mut session = session_with(vec![
            Territory::new("A", "azul", 10),
            Territory::new("B", "verde", 3),
        ]);
        session.missions = vec![PlayerMission {
            player: 1,
            mission: Mission::new(MissionKind::EliminateRed),
        }];

        // No red on the map: the first attack command ends the game
        let (_, winner) = session.play_attack(1, 2);
        assert_eq!(winner, Some(1));
        assert!(session.is_over());

        let summary = session.summary();
        assert_eq!(summary.outcome, GameOutcome::Victory { player: 1 });
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.seed, 42);
    }

    #[test]
    fn test_same_seed_same_game() {
        let build = || {
            let mut s = session_with(vec![
                Territory::new("A", "azul", 40),
                Territory::new("B", "verde", 3),
                Territory::new("C", "preto", 3),
            ]);
            s.assign_missions(2).unwrap();
            for _ in 0..5 {
                let _ = s.play_attack(1, 2);
                let _ = s.play_attack(1, 3);
            }
            s.summary()
        };
        assert_eq!(build(), build());
    }
}
