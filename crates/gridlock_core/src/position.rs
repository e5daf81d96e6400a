//! Named squares of the 3x3 board.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};

/// A square on the board, numbered 0-8 in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this square (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this square (0-2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

}

impl TryFrom<i64> for Position {
    type Error = MoveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(MoveError::OutOfRange(index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_row_major_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_row_column(pos.row(), pos.column()), Some(pos));
        }
    }

    #[test]
    fn test_try_from_rejects_boundaries() {
        assert_eq!(Position::try_from(-1), Err(MoveError::OutOfRange(-1)));
        assert_eq!(Position::try_from(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(Position::try_from(8), Ok(Position::BottomRight));
        assert_eq!(Position::try_from(0), Ok(Position::TopLeft));
    }
}
