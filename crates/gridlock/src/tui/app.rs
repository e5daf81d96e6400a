//! Application state: the presentation side of a game session.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use gridlock_core::{GameController, GameEvent, Player, Position, Square, Symbol, rules::Line};
use std::sync::mpsc;
use tracing::{debug, info};

const SCORES_RESET: &str = "Scores reset.";

/// Main application state.
pub struct App {
    controller: GameController,
    events: mpsc::Receiver<GameEvent>,
    squares: [Square; 9],
    cursor: Position,
    status_message: String,
    last_move: Option<(Symbol, Position)>,
    winning_line: Option<Line>,
    input_enabled: bool,
    should_quit: bool,
}

impl App {
    /// Wraps a controller and subscribes to its events.
    pub fn new(mut controller: GameController) -> Self {
        let (tx, events) = mpsc::channel();
        controller.subscribe(tx);
        Self {
            squares: *controller.board().squares(),
            controller,
            events,
            cursor: Position::Center,
            status_message: "Press 'r' to start a game.".to_string(),
            last_move: None,
            winning_line: None,
            input_enabled: false,
            should_quit: false,
        }
    }

    /// Starts (or restarts) a game.
    pub fn start(&mut self) {
        self.controller.start_or_restart();
        self.drain_events();
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.start(),
            KeyCode::Char('s') => {
                self.controller.reset_scores();
                let prompt = self
                    .status_message
                    .strip_prefix(SCORES_RESET)
                    .unwrap_or(&self.status_message)
                    .trim_start();
                self.status_message = format!("{} {}", SCORES_RESET, prompt);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.submit(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn submit(&mut self, position: Position) {
        if !self.input_enabled {
            self.status_message = "Press 'r' to start a game.".to_string();
            return;
        }
        if let Err(e) = self.controller.submit_move(position.index() as i64) {
            debug!(error = %e, "Move rejected, prompting again");
            self.status_message = format!("{}. Pick another square.", e);
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::BoardChanged(squares) => {
                self.last_move = Position::ALL.iter().copied().find_map(|pos| {
                    match (self.squares[pos.index()], squares[pos.index()]) {
                        (Square::Empty, Square::Marked(symbol)) => Some((symbol, pos)),
                        _ => None,
                    }
                });
                self.squares = squares;
            }
            GameEvent::TurnChanged { player, .. } => {
                self.status_message = match self.last_move {
                    Some((symbol, pos)) => format!("{} played {}. {}'s turn.", symbol, pos, player),
                    None => format!("{}'s turn.", player),
                };
            }
            GameEvent::GameOver { status, message, .. } => {
                self.winning_line = status.line();
                self.status_message =
                    format!("{} Press 'r' to play again or 'q' to quit.", message);
            }
            GameEvent::InputGatingChanged(enabled) => {
                self.input_enabled = enabled;
                if enabled {
                    self.winning_line = None;
                }
            }
        }
    }

    /// Squares as last reported by the controller.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Both players, for the scoreboard.
    pub fn players(&self) -> &[Player; 2] {
        self.controller.players()
    }

    /// Whether moves are accepted.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
