//! The mark a player places on the board.

use crate::error::SymbolError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single printable character used as a player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(char);

impl Symbol {
    /// The conventional first mark.
    pub const X: Symbol = Symbol('X');
    /// The conventional second mark.
    pub const O: Symbol = Symbol('O');

    /// Creates a symbol, rejecting whitespace and control characters.
    #[instrument]
    pub fn new(c: char) -> Result<Self, SymbolError> {
        if c.is_whitespace() {
            return Err(SymbolError::Whitespace);
        }
        if c.is_control() {
            return Err(SymbolError::Control(c as u32));
        }
        Ok(Self(c))
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(SymbolError::Length(s.chars().count())),
        }
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}
