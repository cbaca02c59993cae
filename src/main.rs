//! Territory War - Entry Point
//!
//! Parses the command line, sets up logging, then plays one game on
//! stdin/stdout and prints the closing summary.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use territory_war::console::{run_game, Prompter};
use territory_war::core::config::GameConfig;
use territory_war::core::error::{Result, WarError};
use territory_war::game::GameSummary;
use tracing_subscriber::EnvFilter;

/// Territory War - conquer territories, complete your secret mission
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Turn-based territory conquest with dice combat and secret missions")]
struct Args {
    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Rules file (TOML); see data/rules.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Format of the closing summary
    #[arg(long, value_enum, default_value = "text")]
    summary: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the game table
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("territory_war=info")),
        )
        .with_writer(io::stderr)
        .init();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(WarError::InputClosed) => {
            println!("\nProgram closed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Territory War starting (seed {})", seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let summary = run_game(&mut prompter, &config, seed)?;
    drop(prompter);

    print_summary(&summary, args.summary)
}

fn print_summary(summary: &GameSummary, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Text => print!("\n{}", summary),
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}
