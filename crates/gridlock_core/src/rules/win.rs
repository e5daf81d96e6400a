//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Square, Symbol};
use tracing::instrument;

/// Three squares that win when they all hold the same mark.
pub type Line = [Position; 3];

/// Every winning line, in the order they are checked.
///
/// When more than one line is complete, the earliest entry here decides
/// the result.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the winning symbol and the first complete line, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, Line)> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Marked(symbol) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some((symbol, [a, b, c]))
        }
        _ => None,
    })
}
