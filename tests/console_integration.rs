//! Console integration tests
//!
//! Whole games scripted through an in-memory reader, checking what the
//! players would see and the summary that comes back.

use std::io::Cursor;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use territory_war::combat::roll_battle;
use territory_war::console::{run_game, Prompter};
use territory_war::core::config::{GameConfig, OverflowPolicy};
use territory_war::core::error::WarError;
use territory_war::game::{GameOutcome, GameSummary};
use territory_war::mission::{MissionCatalog, MissionKind};

const SEED: u64 = 2024;

/// Two territories with no mission complete at the start
const SETUP: &str = "2\nT1\nazul\n10\nT2\nvermelha\n3\n1\n";

fn play(script: &str, config: &GameConfig) -> (Result<GameSummary, WarError>, String) {
    play_seeded(script, config, SEED)
}

fn play_seeded(
    script: &str,
    config: &GameConfig,
    seed: u64,
) -> (Result<GameSummary, WarError>, String) {
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = run_game(&mut prompter, config, seed);
    let output = String::from_utf8(prompter.into_output()).unwrap();
    (result, output)
}

#[test]
fn test_setup_then_quit() {
    let (result, output) = play(&format!("{SETUP}0\n"), &GameConfig::default());
    let summary = result.unwrap();

    assert_eq!(summary.outcome, GameOutcome::Abandoned);
    assert_eq!(summary.rounds, 0);
    assert_eq!(summary.seed, SEED);
    assert!(output.contains("Territory 1:\n  Name: T1\n  Faction: azul\n  Troops: 10"));
    assert!(output.contains("=== Player 1 Mission ==="));
    assert!(output.contains("Game closed."));
}

#[test]
fn test_invalid_index_is_reported_and_play_continues() {
    let (result, output) = play(&format!("{SETUP}1\n1\n5\n2\n0\n"), &GameConfig::default());
    let summary = result.unwrap();

    assert!(output.contains("[!] Invalid territory index 5: expected 1 to 2"));
    assert_eq!(output.matches("=== Territory Map ===").count(), 1);
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.outcome, GameOutcome::Abandoned);
    assert_eq!(summary.territories[0].troops, 10);
    assert_eq!(summary.territories[1].troops, 3);
}

#[test]
fn test_rejected_attacks_leave_map_untouched() {
    // T2 attacks itself, then attacks T1 with its single troop
    let script = "2\nT1\nazul\n10\nT2\nvermelha\n1\n1\n1\n2\n2\n1\n2\n1\n0\n";
    let (result, output) = play(script, &GameConfig::default());
    let summary = result.unwrap();

    assert!(output.contains("a territory cannot attack itself"));
    assert!(output.contains("the attacker needs at least 2 troops to attack"));
    // Setup map, then one redraw per refused attack
    assert_eq!(output.matches("=== Territory Map ===").count(), 3);
    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.territories[1].troops, 1);
    assert_eq!(summary.territories[1].faction.as_str(), "vermelha");
}

#[test]
fn test_attack_narrates_and_redraws_map() {
    let (result, output) = play(&format!("{SETUP}1\n1\n2\n0\n"), &GameConfig::default());
    let summary = result.unwrap();

    assert!(output.contains(">>> Battle: T1 (attacker) vs T2 (defender)"));
    assert!(output.contains("Attacker die: "));
    assert_eq!(output.matches("=== Territory Map ===").count(), 2);

    let t1 = &summary.territories[0];
    let t2 = &summary.territories[1];
    let conquered = t2.faction.as_str() == "azul";
    if conquered {
        assert_eq!((t1.troops, t2.troops), (5, 5));
        assert!(output.contains("The attacker won!"));
    } else {
        assert_eq!((t1.troops, t2.troops), (9, 3));
        assert!(output.contains("The defender held!"));
    }
}

#[test]
fn test_same_faction_attack_redraws_map() {
    let script = "2\nT1\nazul\n10\nT2\nazul\n3\n1\n1\n1\n2\n0\n";
    let (result, output) = play(script, &GameConfig::default());
    let summary = result.unwrap();

    assert!(output.contains("attacker and defender belong to the same faction"));
    assert_eq!(output.matches("=== Territory Map ===").count(), 2);
    assert_eq!(summary.territories[0].troops, 10);
    assert_eq!(summary.territories[1].troops, 3);
}

/// First seed whose single mission is completed by T1 conquering T2
///
/// Replays the session's stream: one mission draw, then the battle dice.
fn seed_with_winning_first_attack() -> u64 {
    (0..1_000u64)
        .find(|&seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mission = MissionCatalog::canonical().assign(&mut rng);
            let rolls = roll_battle(&mut rng, 6);
            matches!(mission.kind, MissionKind::EliminateRed | MissionKind::DominateAll)
                && rolls.attacker_wins()
        })
        .expect("Some seed in range should give a winning first attack")
}

#[test]
fn test_victory_halts_play_right_after_the_attack() {
    let seed = seed_with_winning_first_attack();
    // Attack T1 -> T2, then commands that must never run
    let script = format!("{SETUP}1\n1\n2\n2\n1\n2\n1\n0\n");
    let (result, output) = play_seeded(&script, &GameConfig::default(), seed);
    let summary = result.unwrap();

    assert_eq!(summary.outcome, GameOutcome::Victory { player: 1 });
    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.territories[1].faction.as_str(), "azul");
    assert!(output.contains("*** Player 1 completed their mission and won the game! ***"));
    assert_eq!(output.matches("=== Actions ===").count(), 1);
    assert_eq!(output.matches("=== Territory Map ===").count(), 2);

    let banner = output.find("won the game!").unwrap();
    assert!(!output[banner..].contains("Choice: "));
}

#[test]
fn test_check_missions_can_end_the_game() {
    // One blue territory: "eliminate red" and "dominate all" are already complete
    let (result, output) = play("1\nLima\nazul\n4\n1\n3\n0\n", &GameConfig::default());
    let summary = result.unwrap();

    let drawn = MissionCatalog::canonical().assign(&mut ChaCha8Rng::seed_from_u64(SEED));
    assert_eq!(summary.missions[0].mission, drawn);
    assert!(output.contains("=== Mission Status ==="));

    let wins = matches!(drawn.kind, MissionKind::EliminateRed | MissionKind::DominateAll);
    if wins {
        assert_eq!(summary.outcome, GameOutcome::Victory { player: 1 });
        assert!(output.contains("Player 1 completed their mission and won the game!"));
    } else {
        assert_eq!(summary.outcome, GameOutcome::Abandoned);
        assert!(output.contains("[in progress]"));
    }
}

#[test]
fn test_end_of_input_in_menu_ends_like_quit() {
    let (result, output) = play(&format!("{SETUP}2\n"), &GameConfig::default());
    let summary = result.unwrap();
    assert_eq!(summary.outcome, GameOutcome::Abandoned);
    assert!(output.contains("Game closed."));
}

#[test]
fn test_unknown_menu_option() {
    let (_, output) = play(&format!("{SETUP}7\nabc\n0\n"), &GameConfig::default());
    assert!(output.contains("[!] Unknown option 7"));
    assert!(output.contains("'abc' is not a valid number"));
}

#[test]
fn test_reject_policy_reprompts_long_names() {
    let config = GameConfig { overflow: OverflowPolicy::Reject, ..GameConfig::default() };
    let script = "1\nA name that is far too long for the map\nLima\namarelado!\nazul\n2\n1\n0\n";
    let (result, output) = play(script, &config);
    let summary = result.unwrap();

    assert_eq!(summary.territories[0].name, "Lima");
    assert_eq!(summary.territories[0].faction.as_str(), "azul");
    assert!(output.contains("Territory name is 39 characters long (max 29)"));
    assert!(output.contains("Faction is 10 characters long (max 9)"));
}

#[test]
fn test_summary_round_trips_through_json() {
    let (result, _) = play(&format!("{SETUP}0\n"), &GameConfig::default());
    let summary = result.unwrap();
    let json = summary.to_json().unwrap();
    let back: GameSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
