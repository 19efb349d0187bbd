//! Error types for the game state machine.
//!
//! Every failure leaves the engine exactly as it was before the call.

use derive_more::{Display, Error, From};

use crate::game::GameStatus;
use crate::player::PlayerSlot;
use crate::types::Symbol;

/// A move that the engine refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name one of the nine cells.
    #[display("cell {index} is out of range (expected 0-8)")]
    OutOfRange {
        /// Rejected index.
        index: usize,
    },
    /// The cell already holds a symbol.
    #[display("cell {index} is already occupied")]
    Occupied {
        /// Rejected index.
        index: usize,
    },
    /// The game reached a terminal state; no further moves are accepted.
    #[display("game is already over ({status})")]
    GameOver {
        /// Terminal status at the time of the attempt.
        status: GameStatus,
    },
}

impl MoveError {
    /// Returns true for the game-over specialization.
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}

/// The rule a player entry broke during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupRule {
    /// Name is empty after trimming.
    #[display("name must not be empty")]
    EmptyName,
    /// Name contains something other than letters.
    #[display("name must contain only letters")]
    NonAlphabeticName,
    /// Symbol is not exactly one character.
    #[display("symbol must be exactly one letter")]
    SymbolLength,
    /// Symbol is a single character but not a letter.
    #[display("symbol must be a letter")]
    NonAlphabeticSymbol,
    /// Symbol is already used by the other player.
    #[display("symbol '{symbol}' is already taken")]
    DuplicateSymbol {
        /// The clashing symbol, normalized.
        symbol: Symbol,
    },
}

/// Player setup validation failure, naming the offending player and rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{slot}: {rule}")]
pub struct SetupError {
    /// Which player entry failed.
    pub slot: PlayerSlot,
    /// Which rule failed.
    pub rule: SetupRule,
}

impl SetupError {
    /// Creates a setup error for the given slot and rule.
    pub fn new(slot: PlayerSlot, rule: SetupRule) -> Self {
        Self { slot, rule }
    }
}

/// Any error produced by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A rejected move.
    #[display("invalid move: {_0}")]
    Move(MoveError),
    /// A rejected player setup.
    #[display("invalid player setup: {_0}")]
    Setup(SetupError),
}
