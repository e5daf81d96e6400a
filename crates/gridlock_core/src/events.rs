//! Notifications the controller sends to the presentation layer.

use crate::{GameStatus, Player, Seat, Square};
use std::sync::mpsc;
use tracing::warn;

/// Something the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board changed (a mark was placed or the board was cleared).
    BoardChanged([Square; 9]),
    /// The turn passed to `player`.
    TurnChanged {
        /// Seat now holding the turn.
        seat: Seat,
        /// Snapshot of that player.
        player: Player,
    },
    /// The game ended on `player`'s move.
    GameOver {
        /// Final status (win or tie).
        status: GameStatus,
        /// Seat that made the final move.
        seat: Seat,
        /// Snapshot of the acting player, score already updated.
        player: Player,
        /// Human-readable outcome.
        message: String,
    },
    /// Whether moves are being accepted.
    InputGatingChanged(bool),
}

/// Receives [`GameEvent`]s from a [`GameController`](crate::GameController).
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

impl GameObserver for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        if self.send(event.clone()).is_err() {
            warn!(?event, "Event receiver dropped");
        }
    }
}
