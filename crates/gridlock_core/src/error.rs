//! Error types for the game core.

use crate::{Position, Symbol};

/// Why a move submission was rejected.
///
/// These are ordinary outcomes of user input. The board and turn are left
/// untouched and the caller is expected to prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No game is in progress, so input is not being accepted.
    #[display("No game in progress")]
    InputDisabled,

    /// The index does not name a square (valid squares are 0-8).
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfRange(i64),

    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// Error building a game from a pair of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both players were given the same symbol.
    #[display("Both players use the symbol {}", _0)]
    DuplicateSymbol(Symbol),
}

impl std::error::Error for SetupError {}

/// Error creating a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// Whitespace cannot be seen on the board.
    #[display("Symbol cannot be whitespace")]
    Whitespace,

    /// Control characters cannot be rendered.
    #[display("Symbol cannot be control character U+{:04X}", _0)]
    Control(u32),

    /// Symbols are exactly one character long.
    #[display("Symbol must be exactly one character, got {}", _0)]
    Length(usize),
}

impl std::error::Error for SymbolError {}
