//! Pure tic-tac-toe game logic.
//!
//! The [`GameEngine`] owns a 3x3 [`Board`], two [`Player`]s and a pluggable
//! [`WinStrategy`], and announces every accepted move to subscribed
//! [`Observer`]s. There is no I/O here; presentation and persistence live in
//! adapters that read engine state and subscribe to its events.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, GameStatus, PlayerEntry, Roster};
//!
//! let roster = Roster::from_entries(
//!     &PlayerEntry::new("Ada", "x"),
//!     &PlayerEntry::new("Bob", "o"),
//! )?;
//! let mut game = GameEngine::new(roster);
//! for cell in [0, 3, 1, 4, 2] {
//!     game.make_move(cell)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won { winner: 0 });
//! # Ok::<(), noughts_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod observer;
mod player;
pub mod rules;
mod types;

pub use error::{GameError, MoveError, SetupError, SetupRule};
pub use game::{GameEngine, GameState, GameStatus, GameSummary, Outcome};
pub use observer::{GameEvent, Observer, ObserverBus};
pub use player::{Player, PlayerEntry, PlayerSlot, Roster};
pub use rules::{StandardWinStrategy, WIN_COMBINATIONS, WinStrategy};
pub use types::{Board, CELL_COUNT, Cell, Symbol};
