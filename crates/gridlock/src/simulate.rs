//! Headless computer-versus-computer runs.

use crate::settings::Settings;
use gridlock_core::{ResultKind, Seat, SetupError};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Names of the two seats.
    pub names: [String; 2],
    /// Wins per seat.
    pub wins: [u32; 2],
    /// Games with no winner.
    pub ties: u32,
}

impl Tally {
    /// Total games played.
    pub fn games(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played: {}", self.games())?;
        for (name, wins) in self.names.iter().zip(self.wins) {
            writeln!(f, "{:<12} {:>6} wins", name, wins)?;
        }
        write!(f, "{:<12} {:>6}", "Ties", self.ties)
    }
}

/// Plays `games` games with both seats automated.
#[instrument(skip(settings))]
pub fn run(settings: &Settings, games: u32) -> Result<Tally, SetupError> {
    let mut controller = settings.build_controller(settings.automated_players())?;
    let mut ties = 0;

    for game in 0..games {
        let status = controller.start_or_restart();
        debug!(game, %status, "Game finished");
        if status.result() == ResultKind::Tie {
            ties += 1;
        }
    }

    let tally = Tally {
        names: [
            controller.player(Seat::First).name().to_string(),
            controller.player(Seat::Second).name().to_string(),
        ],
        wins: [
            controller.player(Seat::First).score(),
            controller.player(Seat::Second).score(),
        ],
        ties,
    };
    info!(games = tally.games(), ties, "Simulation complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FirstMove;

    #[test]
    fn test_every_game_is_counted() {
        let settings = Settings::default().with_seed(17);
        let tally = run(&settings, 50).unwrap();
        assert_eq!(tally.games(), 50);
        assert_eq!(tally.names, ["Player 1".to_string(), "Computer".to_string()]);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let settings = Settings::default()
            .with_seed(4)
            .with_first_move(FirstMove::Alternate);
        assert_eq!(run(&settings, 25).unwrap(), run(&settings, 25).unwrap());
    }

    #[test]
    fn test_zero_games() {
        let tally = run(&Settings::default().with_seed(0), 0).unwrap();
        assert_eq!(tally.games(), 0);
        assert!(tally.to_string().starts_with("Games played: 0"));
    }
}
