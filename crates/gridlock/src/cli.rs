//! Command-line interface for gridlock.

use crate::settings::{FirstMove, GameMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridlock - tic-tac-toe for two players or against the computer
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "gridlock.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Two players, or player versus computer
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Which seat opens each game
        #[arg(long, value_enum)]
        first_move: Option<FirstMove>,

        /// Seed for the computer player's moves
        #[arg(long)]
        seed: Option<u64>,

        /// Log file path
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play computer against computer without a UI and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Which seat opens each game
        #[arg(long, value_enum)]
        first_move: Option<FirstMove>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "gridlock",
            "play",
            "--mode",
            "two-player",
            "--first-move",
            "alternate",
            "--seed",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                first_move,
                seed,
                log_file,
            } => {
                assert_eq!(mode, Some(GameMode::TwoPlayer));
                assert_eq!(first_move, Some(FirstMove::Alternate));
                assert_eq!(seed, Some(9));
                assert_eq!(log_file, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("gridlock.toml"));
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["gridlock", "simulate", "--config", "other.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Simulate { games: 100, first_move: None, seed: None }
        ));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["gridlock", "play", "--mode", "online"]).is_err());
    }
}
