//! The 3x3 board.

use crate::{GameStatus, Position, Symbol, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's mark.
    Marked(Symbol),
}

impl Square {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// A marked square is never overwritten; the only way to clear it is
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        debug!("Board cleared");
    }

    /// Attempts to place `symbol` at board index `index`.
    ///
    /// Returns `false` without touching the board if the index is outside
    /// 0-8 or the square is already marked.
    #[instrument(skip(self))]
    pub fn mark(&mut self, index: i64, symbol: Symbol) -> bool {
        match Position::try_from(index) {
            Ok(position) => self.place(position, symbol),
            Err(_) => {
                debug!(index, "Rejected mark outside the board");
                false
            }
        }
    }

    /// Places `symbol` at `position` if the square is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, symbol: Symbol) -> bool {
        let square = &mut self.squares[position.index()];
        if !square.is_empty() {
            debug!(%position, "Rejected mark on occupied square");
            return false;
        }
        *square = Square::Marked(symbol);
        true
    }

    /// Gets the square at the given position.
    pub fn get(&self, position: Position) -> Square {
        self.squares[position.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Empty squares in ascending index order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns true when no empty squares remain.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the game status from the marks on the board.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> GameStatus {
        if let Some((symbol, line)) = rules::winning_line(self) {
            GameStatus::Win { symbol, line }
        } else if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::Ongoing
        }
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marked squares.
    pub fn marked_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares shown as their 1-based key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Marked(symbol) => write!(f, "{}", symbol)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_open() {
        let board = Board::new();
        assert_eq!(board.open_positions(), Position::ALL.to_vec());
        assert!(!board.is_full());
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn test_mark_occupied_square_does_not_mutate() {
        let mut board = Board::new();
        assert!(board.mark(4, Symbol::X));
        let before = board.clone();
        assert!(!board.mark(4, Symbol::O));
        assert!(!board.mark(4, Symbol::X));
        assert_eq!(board, before);
        assert_eq!(board.get(Position::Center), Square::Marked(Symbol::X));
    }

    #[test]
    fn test_mark_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!board.mark(9, Symbol::X));
        assert!(!board.mark(-1, Symbol::X));
        assert!(!board.mark(i64::MAX, Symbol::X));
        assert_eq!(board, Board::new());
        assert!(board.mark(8, Symbol::X));
        assert!(board.mark(0, Symbol::O));
    }

    #[test]
    fn test_reset_clears_marks() {
        let mut board = Board::new();
        for i in 0..9 {
            assert!(board.mark(i, Symbol::X));
        }
        assert!(board.is_full());
        assert!(board.open_positions().is_empty());

        board.reset();
        assert_eq!(board.open_positions(), Position::ALL.to_vec());
        assert!(!board.is_full());
    }

    #[test]
    fn test_open_positions_ascending_after_marks() {
        let mut board = Board::new();
        board.mark(7, Symbol::X);
        board.mark(0, Symbol::O);
        board.mark(4, Symbol::X);
        assert_eq!(
            board.open_positions(),
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display_shows_keys_for_empty_squares() {
        let mut board = Board::new();
        board.mark(0, Symbol::X);
        board.mark(4, Symbol::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
