//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::Symbol;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.mark(4, Symbol::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / X O O / O X X
        for (i, c) in "XOXXOOOXX".chars().enumerate() {
            let symbol = if c == 'X' { Symbol::X } else { Symbol::O };
            assert!(board.mark(i as i64, symbol));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X O X / O X O / O X X: diagonal for X on the last square
        for (i, c) in "XOXOXOOXX".chars().enumerate() {
            let symbol = if c == 'X' { Symbol::X } else { Symbol::O };
            assert!(board.mark(i as i64, symbol));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
