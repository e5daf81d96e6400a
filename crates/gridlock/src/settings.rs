//! Session settings loaded from TOML and overridden on the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridlock_core::{FirstMovePolicy, GameController, Player, Seat, SetupError, Symbol};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who sits in the second seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the keyboard.
    TwoPlayer,
    /// The second seat is played by the computer.
    #[default]
    VsComputer,
}

/// Which seat opens each game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FirstMove {
    /// Player one always opens.
    #[default]
    First,
    /// Player two always opens.
    Second,
    /// Openers swap every game.
    Alternate,
}

impl From<FirstMove> for FirstMovePolicy {
    fn from(first: FirstMove) -> Self {
        match first {
            FirstMove::First => FirstMovePolicy::Fixed(Seat::First),
            FirstMove::Second => FirstMovePolicy::Fixed(Seat::Second),
            FirstMove::Alternate => FirstMovePolicy::Alternate,
        }
    }
}

/// Name and mark for one seat. Either may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatSettings {
    /// Display name; a default is chosen per seat when absent.
    name: Option<String>,
    /// The mark placed on the board; X for seat one and O for seat two when absent.
    symbol: Option<Symbol>,
}

/// Settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Two humans, or human versus computer.
    mode: GameMode,
    /// Opening seat policy.
    first_move: FirstMove,
    /// Seed for the computer player; OS entropy when absent.
    seed: Option<u64>,
    /// Seat one.
    player_one: SeatSettings,
    /// Seat two.
    player_two: SeatSettings,
    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            first_move: FirstMove::default(),
            seed: None,
            player_one: SeatSettings::default(),
            player_two: SeatSettings::default(),
            log_file: PathBuf::from("gridlock.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the opening policy.
    pub fn with_first_move(mut self, first_move: FirstMove) -> Self {
        self.first_move = first_move;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Players for an interactive session, according to the mode.
    pub fn players(&self) -> [Player; 2] {
        let one = Player::human(self.seat_name(Seat::First), self.seat_symbol(Seat::First));
        let two = match self.mode {
            GameMode::TwoPlayer => Player::human(self.seat_name(Seat::Second), self.seat_symbol(Seat::Second)),
            GameMode::VsComputer => {
                Player::automated(self.seat_name(Seat::Second), self.seat_symbol(Seat::Second))
            }
        };
        [one, two]
    }

    /// Both seats played by the computer.
    pub fn automated_players(&self) -> [Player; 2] {
        [
            Player::automated(self.seat_name(Seat::First), self.seat_symbol(Seat::First)),
            Player::automated(self.seat_name(Seat::Second), self.seat_symbol(Seat::Second)),
        ]
    }

    /// Builds a controller for `players` using the configured seed and policy.
    #[instrument(skip(self, players))]
    pub fn build_controller(&self, players: [Player; 2]) -> Result<GameController, SetupError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameController::with_rng(players, self.first_move.into(), rng)
    }

    fn seat_symbol(&self, seat: Seat) -> Symbol {
        match seat {
            Seat::First => self.player_one.symbol.unwrap_or(Symbol::X),
            Seat::Second => self.player_two.symbol.unwrap_or(Symbol::O),
        }
    }

    fn seat_name(&self, seat: Seat) -> String {
        let (configured, fallback) = match (seat, self.mode) {
            (Seat::First, _) => (&self.player_one.name, "Player 1"),
            (Seat::Second, GameMode::TwoPlayer) => (&self.player_two.name, "Player 2"),
            (Seat::Second, GameMode::VsComputer) => (&self.player_two.name, "Computer"),
        };
        configured.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
