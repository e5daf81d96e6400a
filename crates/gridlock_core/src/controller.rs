//! Turn sequencing and the game-over protocol.
//!
//! [`GameController`] owns the board, both players and the random source.
//! The presentation layer drives it with [`GameController::start_or_restart`]
//! and [`GameController::submit_move`], and renders the [`GameEvent`]s it
//! emits to subscribed observers.

use crate::error::{MoveError, SetupError};
use crate::events::{GameEvent, GameObserver};
use crate::{Board, GameStatus, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two places at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// The first player passed to the controller.
    First,
    /// The second player passed to the controller.
    Second,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into the controller's player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for a start command; input is ignored.
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// A win or tie was reached; waiting for a restart.
    GameOver,
}

/// Who moves first when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstMovePolicy {
    /// The same seat opens every game.
    Fixed(Seat),
    /// The opening seat swaps every game, beginning with [`Seat::First`].
    Alternate,
}

impl Default for FirstMovePolicy {
    fn default() -> Self {
        FirstMovePolicy::Fixed(Seat::First)
    }
}

/// Human-readable description of a finished game.
pub fn outcome_message(status: &GameStatus, player: &Player) -> String {
    match status {
        GameStatus::Win { .. } => format!("{} wins!", player),
        GameStatus::Tie => "It's a tie!".to_string(),
        GameStatus::Ongoing => "Game in progress".to_string(),
    }
}

/// Orchestrates a session of games between two players.
pub struct GameController<R = StdRng> {
    board: Board,
    players: [Player; 2],
    current: Seat,
    phase: Phase,
    policy: FirstMovePolicy,
    last_first: Option<Seat>,
    rng: R,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameController<StdRng> {
    /// Creates a controller whose automated players draw from OS entropy.
    pub fn new(players: [Player; 2], policy: FirstMovePolicy) -> Result<Self, SetupError> {
        Self::with_rng(players, policy, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameController<R> {
    /// Creates a controller with an injected random source.
    #[instrument(skip(rng), fields(first = %players[0], second = %players[1]))]
    pub fn with_rng(players: [Player; 2], policy: FirstMovePolicy, rng: R) -> Result<Self, SetupError> {
        if players[0].symbol() == players[1].symbol() {
            warn!(symbol = %players[0].symbol(), "Players share a symbol");
            return Err(SetupError::DuplicateSymbol(players[0].symbol()));
        }

        Ok(Self {
            board: Board::new(),
            players,
            current: Seat::First,
            phase: Phase::NotStarted,
            policy,
            last_first: None,
            rng,
            observers: Vec::new(),
        })
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Clears the board and begins a new game.
    ///
    /// Valid from any phase. If the opening player is automated, it moves
    /// before this returns.
    #[instrument(skip(self))]
    pub fn start_or_restart(&mut self) -> GameStatus {
        self.board.reset();
        let first = match self.policy {
            FirstMovePolicy::Fixed(seat) => seat,
            FirstMovePolicy::Alternate => self.last_first.map_or(Seat::First, Seat::other),
        };
        self.last_first = Some(first);
        self.current = first;
        self.phase = Phase::InProgress;
        info!(first = %self.current_player(), "Game started");

        self.emit(GameEvent::BoardChanged(*self.board.squares()));
        self.emit_turn();
        self.emit(GameEvent::InputGatingChanged(true));

        self.play_automated_turns();
        self.status()
    }

    /// Abandons any game in progress and waits for a start command.
    ///
    /// Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::NotStarted;
        self.emit(GameEvent::BoardChanged(*self.board.squares()));
        self.emit(GameEvent::InputGatingChanged(false));
    }

    /// Places the current player's mark at board index `index`.
    ///
    /// On a rejected move nothing changes and no events are sent; the
    /// caller should prompt again. After an accepted move any automated
    /// player whose turn follows moves immediately. Returns the status once
    /// control is back with a human or the game is over.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: i64) -> Result<GameStatus, MoveError> {
        self.apply_move(index)?;
        self.play_automated_turns();
        Ok(self.status())
    }

    /// Zeroes both players' scores.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        debug!("Scores reset");
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat holding the turn.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player holding the turn.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn is_accepting_input(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        self.board.evaluate()
    }

    /// Validates and applies one move for the current player.
    fn apply_move(&mut self, index: i64) -> Result<GameStatus, MoveError> {
        if self.phase != Phase::InProgress {
            debug!(index, phase = %self.phase, "Move ignored while input disabled");
            return Err(MoveError::InputDisabled);
        }

        let seat = self.current;
        let symbol = self.players[seat.index()].symbol();
        if !self.board.mark(index, symbol) {
            let err = match Position::try_from(index) {
                Ok(position) => MoveError::Occupied(position),
                Err(err) => err,
            };
            debug!(index, error = %err, "Move rejected");
            return Err(err);
        }
        debug!(index, %symbol, "Move applied");

        self.emit(GameEvent::BoardChanged(*self.board.squares()));
        let status = self.board.evaluate();

        if status.is_game_over() {
            if let GameStatus::Win { .. } = status {
                self.players[seat.index()].add_score();
            }
            self.phase = Phase::GameOver;

            let player = self.players[seat.index()].clone();
            let message = outcome_message(&status, &player);
            info!(%status, %message, "Game over");
            self.emit(GameEvent::GameOver {
                status,
                seat,
                player,
                message,
            });
            self.emit(GameEvent::InputGatingChanged(false));
        } else {
            self.current = seat.other();
            self.emit_turn();
        }

        Ok(status)
    }

    /// Lets automated players move until a human holds the turn or the game ends.
    fn play_automated_turns(&mut self) {
        while self.phase == Phase::InProgress && self.current_player().is_automated() {
            let open = self.board.open_positions();
            let Some(position) = self.players[self.current.index()].choose_move(&open, &mut self.rng)
            else {
                break;
            };
            if let Err(err) = self.apply_move(position.index() as i64) {
                panic!("automated move at {position} was rejected: {err}");
            }
        }
    }

    fn emit_turn(&mut self) {
        let event = GameEvent::TurnChanged {
            seat: self.current,
            player: self.current_player().clone(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl<R> std::fmt::Debug for GameController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_humans() -> GameController {
        GameController::with_rng(
            [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::O)],
            FirstMovePolicy::default(),
            StdRng::seed_from_u64(0),
        )
        .unwrap()
    }

    fn recorded(controller: &mut GameController) -> Rc<RefCell<Vec<GameEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.subscribe(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let result = GameController::new(
            [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::X)],
            FirstMovePolicy::default(),
        );
        assert_eq!(result.unwrap_err(), SetupError::DuplicateSymbol(Symbol::X));
    }

    #[test]
    fn test_moves_ignored_before_start() {
        let mut game = two_humans();
        let events = recorded(&mut game);
        assert_eq!(game.submit_move(4), Err(MoveError::InputDisabled));
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.board().marked_count(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_start_emits_board_turn_and_gating() {
        let mut game = two_humans();
        let events = recorded(&mut game);
        game.start_or_restart();

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], GameEvent::BoardChanged(*Board::new().squares()));
        assert!(matches!(&events[1], GameEvent::TurnChanged { seat: Seat::First, player } if player.name() == "Alice"));
        assert_eq!(events[2], GameEvent::InputGatingChanged(true));
        assert!(game.is_accepting_input());
    }

    #[test]
    fn test_rejected_move_sends_no_events() {
        let mut game = two_humans();
        game.start_or_restart();
        game.submit_move(0).unwrap();
        let events = recorded(&mut game);

        assert_eq!(game.submit_move(0), Err(MoveError::Occupied(Position::TopLeft)));
        assert_eq!(game.submit_move(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.submit_move(-1), Err(MoveError::OutOfRange(-1)));
        assert!(events.borrow().is_empty());
        assert_eq!(game.current_seat(), Seat::Second);
    }

    #[test]
    fn test_win_disables_input_and_scores() {
        let mut game = two_humans();
        game.start_or_restart();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.submit_move(index), Ok(GameStatus::Ongoing));
        }
        let events = recorded(&mut game);
        let status = game.submit_move(2).unwrap();

        assert_eq!(status.symbol(), Some(Symbol::X));
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.player(Seat::First).score(), 1);
        assert_eq!(game.player(Seat::Second).score(), 0);
        assert_eq!(game.submit_move(8), Err(MoveError::InputDisabled));

        let events = events.borrow();
        assert!(matches!(events[0], GameEvent::BoardChanged(_)));
        match &events[1] {
            GameEvent::GameOver { seat, message, player, .. } => {
                assert_eq!(*seat, Seat::First);
                assert_eq!(message, "Alice (X) wins!");
                assert_eq!(player.score(), 1);
            }
            other => panic!("expected game over, got {other:?}"),
        }
        assert_eq!(events[2], GameEvent::InputGatingChanged(false));
    }

    #[test]
    fn test_reset_keeps_scores_and_gates_input() {
        let mut game = two_humans();
        game.start_or_restart();
        for index in [0, 3, 1, 4, 2] {
            game.submit_move(index).unwrap();
        }
        game.reset();
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.board().marked_count(), 0);
        assert_eq!(game.player(Seat::First).score(), 1);
        assert_eq!(game.submit_move(0), Err(MoveError::InputDisabled));

        game.reset_scores();
        assert_eq!(game.player(Seat::First).score(), 0);
    }

    #[test]
    fn test_alternate_policy_swaps_opener() {
        let mut game = GameController::with_rng(
            [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::O)],
            FirstMovePolicy::Alternate,
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let openers: Vec<_> = (0..4)
            .map(|_| {
                game.start_or_restart();
                game.current_seat()
            })
            .collect();
        assert_eq!(openers, vec![Seat::First, Seat::Second, Seat::First, Seat::Second]);
    }

    #[test]
    fn test_fixed_second_policy() {
        let mut game = GameController::with_rng(
            [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::O)],
            FirstMovePolicy::Fixed(Seat::Second),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        game.start_or_restart();
        assert_eq!(game.current_player().name(), "Bob");
        game.submit_move(4).unwrap();
        assert_eq!(game.board().get(Position::Center), crate::Square::Marked(Symbol::O));
    }
}
