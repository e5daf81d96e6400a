//! Players: a name, a mark, and a running score.

use crate::{Position, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who supplies a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside (keyboard, click, test).
    Human,
    /// The player picks uniformly at random among open squares.
    Automated,
}

/// A participant in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
    score: u32,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, symbol: Symbol, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            symbol,
            score: 0,
            kind,
        }
    }

    /// Creates a player whose moves are supplied externally.
    pub fn human(name: impl Into<String>, symbol: Symbol) -> Self {
        Self::new(name, symbol, PlayerKind::Human)
    }

    /// Creates a computer player.
    pub fn automated(name: impl Into<String>, symbol: Symbol) -> Self {
        Self::new(name, symbol, PlayerKind::Automated)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Games won since the last score reset.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Human or automated.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns true for computer players.
    pub fn is_automated(&self) -> bool {
        self.kind == PlayerKind::Automated
    }

    /// Records a win.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn add_score(&mut self) {
        self.score += 1;
        debug!(score = self.score, "Score incremented");
    }

    /// Zeroes the score.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Picks a move for an automated player.
    ///
    /// Returns `None` for human players, whose moves arrive from outside.
    ///
    /// # Panics
    ///
    /// Panics if `open` is empty. The controller never asks for a move on a
    /// full board.
    #[instrument(skip(self, rng), fields(player = %self.name))]
    pub fn choose_move<R: Rng + ?Sized>(&self, open: &[Position], rng: &mut R) -> Option<Position> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Automated => {
                assert!(!open.is_empty(), "automated player asked to move with no open squares");
                let choice = open.choose(rng).copied();
                debug!(?choice, candidates = open.len(), "Automated player chose");
                choice
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
