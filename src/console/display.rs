//! Text rendering for the console game

use std::io::{self, Write};

use crate::combat::{BattleOutcome, BattleReport};
use crate::core::types::PlayerId;
use crate::map::Registry;
use crate::mission::{MissionStatus, PlayerMission};

/// Territory table followed by a per-faction tally
pub fn render_map<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Territory Map ===")?;
    for (i, territory) in registry.list().iter().enumerate() {
        writeln!(out, "Territory {}:", i + 1)?;
        writeln!(out, "  Name: {}", territory.name)?;
        writeln!(out, "  Faction: {}", territory.faction)?;
        writeln!(out, "  Troops: {}", territory.troops)?;
        writeln!(out, "-----------------------------")?;
    }

    let mut counts: Vec<_> = registry.faction_counts().into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    let tally: Vec<String> = counts
        .iter()
        .map(|(faction, n)| format!("{} {}", faction, n))
        .collect();
    writeln!(out, "Holdings: {}", tally.join(", "))?;
    Ok(())
}

pub fn render_battle<W: Write>(out: &mut W, report: &BattleReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        ">>> Battle: {} (attacker) vs {} (defender)",
        report.attacker_name, report.defender_name
    )?;
    writeln!(
        out,
        "Attacker die: {} | Defender die: {}",
        report.rolls.attacker, report.rolls.defender
    )?;
    match report.outcome {
        BattleOutcome::AttackerVictory => writeln!(
            out,
            "The attacker won! {} now belongs to {} with {} troops.",
            report.defender_name, report.attacker_faction, report.defender_troops
        ),
        BattleOutcome::DefenderHeld => writeln!(
            out,
            "The defender held! {} falls back to {} troops.",
            report.attacker_name, report.attacker_troops
        ),
    }
}

pub fn render_mission<W: Write>(out: &mut W, assigned: &PlayerMission) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Player {} Mission ===", assigned.player)?;
    writeln!(out, "{}", assigned.mission)?;
    writeln!(out, "----------------------------")
}

pub fn render_statuses<W: Write>(out: &mut W, statuses: &[MissionStatus]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Mission Status ===")?;
    for status in statuses {
        let mark = if status.satisfied { "complete" } else { "in progress" };
        writeln!(out, "Player {}: {} [{}]", status.player, status.mission, mark)?;
    }
    Ok(())
}

pub fn render_victory<W: Write>(out: &mut W, player: PlayerId) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "*** Player {} completed their mission and won the game! ***", player)
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Actions ===")?;
    writeln!(out, "1 - Attack")?;
    writeln!(out, "2 - Show territories")?;
    writeln!(out, "3 - Check missions")?;
    writeln!(out, "0 - Quit")
}
