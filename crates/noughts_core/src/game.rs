//! Game engine: turn sequencing, move application and terminal detection.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::MoveError;
use crate::observer::{GameEvent, Observer, ObserverBus};
use crate::player::{Player, Roster};
use crate::rules::{StandardWinStrategy, WinStrategy, is_draw};
use crate::types::Board;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the player at `winner` (0 or 1).
    Won {
        /// Turn index of the winner.
        winner: usize,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => f.write_str("in progress"),
            Self::Won { winner } => write!(f, "won by player {}", winner + 1),
            Self::Draw => f.write_str("draw"),
        }
    }
}

/// Mutable per-game state. Replaced wholesale on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Index of the player to move next.
    turn: usize,
    /// Game status.
    status: GameStatus,
    /// Cells played, in order.
    history: Vec<usize>,
}

impl GameState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn index (0 or 1).
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[usize] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// This player completed a line.
    Winner(Player),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Human-readable result, as stored with finished games.
    pub fn result_text(&self) -> String {
        match self {
            Self::Winner(player) => format!("{} wins!", player.name()),
            Self::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Everything a persistence adapter needs about a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Both players in turn order.
    pub players: Roster,
    /// Result.
    pub outcome: Outcome,
    /// Number of moves played.
    pub moves: usize,
}

/// Tic-tac-toe state machine.
///
/// Owns the board, the two players, the win policy and the observer list.
/// Single-threaded: every call runs to completion, observers included,
/// before it returns.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    players: Roster,
    strategy: Box<dyn WinStrategy>,
    observers: ObserverBus,
}

impl GameEngine {
    /// Creates a new game with the standard win strategy.
    #[instrument]
    pub fn new(players: Roster) -> Self {
        Self::with_strategy(players, Box::new(StandardWinStrategy))
    }

    /// Creates a new game with a custom win strategy.
    #[instrument]
    pub fn with_strategy(players: Roster, strategy: Box<dyn WinStrategy>) -> Self {
        info!(first = %players.first(), second = %players.second(), "New game");
        Self {
            state: GameState::default(),
            players,
            strategy,
            observers: ObserverBus::new(),
        }
    }

    /// Installs a validated roster and starts a fresh game.
    ///
    /// Subscriptions are kept.
    #[instrument(skip(self))]
    pub fn set_players(&mut self, players: Roster) {
        info!(first = %players.first(), second = %players.second(), "Players set");
        self.players = players;
        self.state = GameState::default();
    }

    /// Subscribes an observer. Subscriptions survive [`reset`](Self::reset).
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.subscribe(observer);
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Number of subscriptions.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Plays the current player's symbol at `index` (0-8).
    ///
    /// On success the turn passes to the other player, the status is
    /// re-evaluated (win before draw, the win going to the player who just
    /// moved) and observers receive [`GameEvent::MoveMade`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::OutOfRange`] or [`MoveError::Occupied`] for an invalid cell
    ///
    /// Nothing changes and nobody is notified when an error is returned.
    #[instrument(skip(self), fields(turn = self.state.turn))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.state.status.is_terminal() {
            debug!(status = %self.state.status, "Move rejected, game over");
            return Err(MoveError::GameOver {
                status: self.state.status,
            });
        }

        let mover = self.state.turn;
        let symbol = self.current_player().symbol();
        self.state.board.apply_move(index, symbol)?;
        self.state.history.push(index);
        self.state.turn = 1 - mover;

        if self.strategy.check_winner(&self.state.board) {
            self.state.status = GameStatus::Won { winner: mover };
        } else if self.state.board.is_full() {
            self.state.status = GameStatus::Draw;
        }
        debug!(index, %symbol, status = %self.state.status, "Move applied");

        let event = GameEvent::MoveMade {
            cell: index,
            symbol,
            board: self.state.board.clone(),
        };
        self.observers.notify(&event);

        if self.state.status.is_terminal() {
            info!(status = %self.state.status, moves = self.state.history.len(), "Game finished");
        }
        Ok(())
    }

    /// Starts over with the same players. Subscriptions are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::default();
    }

    /// Asks the win strategy about the current board.
    pub fn check_winner(&self) -> bool {
        self.strategy.check_winner(&self.state.board)
    }

    /// True when the board is full without a winning line.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.state.board, self.strategy.as_ref())
    }

    /// Cells of the winning line, when the strategy can name one.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.strategy.winning_line(&self.state.board)
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Owned copy of the board.
    pub fn snapshot(&self) -> Board {
        self.state.board.clone()
    }

    /// Read-only view of the whole game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Index of the player to move (0 or 1).
    pub fn turn_index(&self) -> usize {
        self.state.turn
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player_at(self.state.turn)
    }

    /// Both players.
    pub fn players(&self) -> &Roster {
        &self.players
    }

    /// Cells played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.state.history
    }

    /// Winner, once the game is won.
    pub fn winner(&self) -> Option<&Player> {
        match self.state.status {
            GameStatus::Won { winner } => Some(self.player_at(winner)),
            _ => None,
        }
    }

    /// Summary of a finished game; `None` while in progress.
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = match self.state.status {
            GameStatus::InProgress => return None,
            GameStatus::Won { winner } => Outcome::Winner(self.player_at(winner).clone()),
            GameStatus::Draw => Outcome::Draw,
        };
        Some(GameSummary {
            players: self.players.clone(),
            outcome,
            moves: self.state.history.len(),
        })
    }

    fn player_at(&self, index: usize) -> &Player {
        if index == 0 {
            self.players.first()
        } else {
            self.players.second()
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}
