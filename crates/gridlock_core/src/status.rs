//! Game status derived from the board.

use crate::{Symbol, rules::Line};
use serde::{Deserialize, Serialize};

/// Result category of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResultKind {
    /// Play continues.
    None,
    /// A player completed a line.
    Win,
    /// The board filled with no line.
    Tie,
}

/// Status of the board, computed on demand by [`Board::evaluate`](crate::Board::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line and at least one open square.
    Ongoing,
    /// `symbol` holds every square of `line`.
    Win {
        /// The winning mark.
        symbol: Symbol,
        /// The first complete line in check order.
        line: Line,
    },
    /// Full board, no line.
    Tie,
}

impl GameStatus {
    /// True for wins and ties.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// The result category.
    pub fn result(&self) -> ResultKind {
        match self {
            GameStatus::Ongoing => ResultKind::None,
            GameStatus::Win { .. } => ResultKind::Win,
            GameStatus::Tie => ResultKind::Tie,
        }
    }

    /// The winning symbol; present only for a win.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            GameStatus::Win { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    /// The winning line; present only for a win.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameStatus::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "In progress"),
            GameStatus::Win { symbol, .. } => write!(f, "{} wins", symbol),
            GameStatus::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_accessors_mirror_variant() {
        let win = GameStatus::Win {
            symbol: Symbol::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        };
        assert!(win.is_game_over());
        assert_eq!(win.result(), ResultKind::Win);
        assert_eq!(win.symbol(), Some(Symbol::X));

        assert!(GameStatus::Tie.is_game_over());
        assert_eq!(GameStatus::Tie.result(), ResultKind::Tie);
        assert_eq!(GameStatus::Tie.symbol(), None);

        assert!(!GameStatus::Ongoing.is_game_over());
        assert_eq!(GameStatus::Ongoing.result(), ResultKind::None);
        assert_eq!(GameStatus::Ongoing.line(), None);
    }

    #[test]
    fn test_result_kind_names() {
        assert_eq!(ResultKind::None.to_string(), "none");
        assert_eq!(ResultKind::Win.to_string(), "win");
        assert_eq!(ResultKind::Tie.to_string(), "tie");
    }
}
