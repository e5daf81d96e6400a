//! Gridlock core - tic-tac-toe rules and turn controller
//!
//! Pure game logic with no I/O. A presentation layer owns a
//! [`GameController`], forwards user input to it, and renders the
//! [`GameEvent`]s it emits.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{FirstMovePolicy, GameController, GameStatus, Player, Symbol};
//!
//! let players = [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::O)];
//! let mut game = GameController::new(players, FirstMovePolicy::default()).unwrap();
//! game.start_or_restart();
//!
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.submit_move(index), Ok(GameStatus::Ongoing));
//! }
//! let status = game.submit_move(2).unwrap();
//! assert_eq!(status.symbol(), Some(Symbol::X));
//! assert_eq!(game.players()[0].score(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod events;
mod player;
mod position;
pub mod rules;
mod status;
mod symbol;

pub use board::{Board, Square};
pub use controller::{FirstMovePolicy, GameController, Phase, Seat, outcome_message};
pub use error::{MoveError, SetupError, SymbolError};
pub use events::{GameEvent, GameObserver};
pub use player::{Player, PlayerKind};
pub use position::Position;
pub use status::{GameStatus, ResultKind};
pub use symbol::Symbol;
