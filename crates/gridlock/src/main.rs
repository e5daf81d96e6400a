//! Gridlock - terminal tic-tac-toe
//!
//! Two players at one keyboard, or one player against a computer that
//! picks uniformly at random among the open squares.

#![forbid(unsafe_code)]

mod cli;
mod logging;
mod settings;
mod simulate;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use settings::Settings;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            mode,
            first_move,
            seed,
            log_file,
        } => {
            let mut settings = settings;
            if let Some(mode) = mode {
                settings = settings.with_mode(mode);
            }
            if let Some(first_move) = first_move {
                settings = settings.with_first_move(first_move);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            if let Some(log_file) = log_file {
                settings = settings.with_log_file(log_file);
            }
            run_play(settings)
        }
        Command::Simulate {
            games,
            first_move,
            seed,
        } => {
            let mut settings = settings;
            if let Some(first_move) = first_move {
                settings = settings.with_first_move(first_move);
            }
            if let Some(seed) = seed {
                settings = settings.with_seed(seed);
            }
            run_simulate(settings, games)
        }
    }
}

/// Run the interactive terminal UI
#[instrument(skip_all, fields(mode = %settings.mode()))]
fn run_play(settings: Settings) -> Result<()> {
    logging::init_to_file(settings.log_file())?;
    info!(first_move = %settings.first_move(), seed = ?settings.seed(), "Starting game session");

    let controller = settings.build_controller(settings.players())?;
    tui::run(controller)
}

/// Run computer-versus-computer games and print the tally
#[instrument(skip_all, fields(games = games))]
fn run_simulate(settings: Settings, games: u32) -> Result<()> {
    logging::init_to_stderr();
    let tally = simulate::run(&settings, games)?;
    println!("{}", tally);
    Ok(())
}
