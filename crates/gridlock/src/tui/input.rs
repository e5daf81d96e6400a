//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use gridlock_core::Position;

/// Moves the cursor one square with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_column(row, col).unwrap_or(cursor)
}

/// Maps the digit keys 1-9 to squares, laid out like the board.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}
