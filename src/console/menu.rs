//! Menu-driven game loop
//!
//! Setup (territories, players, missions) followed by the action menu.
//! Everything goes through a [`Prompter`], so a whole game can be scripted.

use std::io::{BufRead, Write};

use crate::console::display;
use crate::console::prompt::Prompter;
use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::game::{GameSession, GameSummary};
use crate::map::{parse_faction, parse_name, Registry, Territory};

/// One choice from the action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    Attack,
    List,
    CheckMissions,
}

impl MenuCommand {
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            0 => Some(MenuCommand::Quit),
            1 => Some(MenuCommand::Attack),
            2 => Some(MenuCommand::List),
            3 => Some(MenuCommand::CheckMissions),
            _ => None,
        }
    }
}

/// Play one complete game and return its summary
///
/// Running out of input during the menu ends the game like a quit. Running
/// out during setup is an error, since there is no game to summarize yet.
pub fn run_game<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
    seed: u64,
) -> Result<GameSummary> {
    let registry = register_territories(prompter, config)?;
    display::render_map(prompter.output(), &registry)?;

    let mut session = GameSession::new(config.clone(), registry, seed);
    tracing::info!("Game started with {} territories (seed {})", session.registry.len(), seed);

    let players: usize = prompter.prompt_with("\nNumber of players: ", parse_positive)?;
    session.assign_missions(players)?;
    for assigned in &session.missions {
        display::render_mission(prompter.output(), assigned)?;
    }

    match menu_loop(prompter, &mut session) {
        Ok(()) | Err(WarError::InputClosed) => {}
        Err(e) => return Err(e),
    }

    if let Some(player) = session.winner() {
        display::render_victory(prompter.output(), player)?;
    }
    writeln!(prompter.output(), "\nGame closed.")?;
    tracing::info!("Game finished after {} rounds", session.rounds());
    Ok(session.summary())
}

fn register_territories<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
) -> Result<Registry> {
    let count = prompter.prompt_with("Number of territories: ", |line| {
        let n = parse_positive(line)?;
        Registry::create(n).map(|registry| (n, registry))
    })?;
    let (n, mut registry) = count;

    for index in 0..n {
        writeln!(prompter.output(), "\nTerritory {} registration", index + 1)?;

        let name = prompter.prompt_with("Territory name: ", |line| parse_name(line, config))?;
        let faction = prompter.prompt_with("Army faction: ", |line| parse_faction(line, config))?;
        let troops: u32 = prompter.prompt_number("Troops: ")?;
        registry.register(index, Territory::new(name, faction, troops))?;
    }

    Ok(registry)
}

fn menu_loop<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut GameSession,
) -> Result<()> {
    while !session.is_over() {
        display::render_menu(prompter.output())?;
        let choice: u32 = prompter.prompt_number("Choice: ")?;

        match MenuCommand::from_choice(choice) {
            Some(MenuCommand::Quit) => {
                tracing::info!("Players quit");
                break;
            }
            Some(MenuCommand::Attack) => attack_command(prompter, session)?,
            Some(MenuCommand::List) => display::render_map(prompter.output(), &session.registry)?,
            Some(MenuCommand::CheckMissions) => {
                display::render_statuses(prompter.output(), &session.mission_statuses())?;
                session.check_victory();
            }
            None => writeln!(prompter.output(), "[!] Unknown option {}", choice)?,
        }
    }
    Ok(())
}

fn attack_command<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut GameSession,
) -> Result<()> {
    let n = session.registry.len();
    let attacker: usize = prompter.prompt_number(&format!("Attacking territory (1 to {}): ", n))?;
    let defender: usize = prompter.prompt_number(&format!("Defending territory (1 to {}): ", n))?;

    let (result, _) = session.play_attack(attacker, defender);
    match result {
        Ok(report) => {
            display::render_battle(prompter.output(), &report)?;
            display::render_map(prompter.output(), &session.registry)?;
        }
        Err(e @ WarError::InvalidAttack(_)) => {
            writeln!(prompter.output(), "\n[!] {}", e)?;
            display::render_map(prompter.output(), &session.registry)?;
        }
        Err(e) if e.is_recoverable() => writeln!(prompter.output(), "\n[!] {}", e)?,
        Err(e) => return Err(e),
    }
    Ok(())
}

fn parse_positive(line: &str) -> Result<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WarError::InvalidInput(format!(
            "'{}' is not a whole number greater than zero",
            line.trim()
        ))),
    }
}
