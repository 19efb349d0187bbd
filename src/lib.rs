//! Noughts - two-player tic-tac-toe front ends
//!
//! The game rules live in [`noughts_core`]; this crate adds everything
//! around them.
//!
//! # Architecture
//!
//! - **Prompt**: line-based menu, setup and game loop over any reader/writer
//! - **TUI**: full-screen ratatui front end
//! - **DB**: SQLite records of finished games via diesel
//! - **Config/CLI**: TOML settings, `.env` overrides and clap commands
//!
//! # Example
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::io::Cursor;
//! use std::rc::Rc;
//!
//! use noughts::{GameRepository, PromptSession};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut repo = GameRepository::open("noughts.db")?;
//! let output = Rc::new(RefCell::new(Vec::<u8>::new()));
//! let input = Cursor::new("1\nAda\nx\nBob\no\n1\n4\n2\n5\n3\n3\n");
//! PromptSession::new(input, output, &mut repo).run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
mod db;
mod history;
mod input;
mod prompt;
pub mod tui;

// Crate-level exports - Persistence
pub use db::{
    DbError, DbErrorKind, GameRecord, GameRepository, MemorySink, NewGameRecord, RecordSink,
    record_summary,
};

// Crate-level exports - History output
pub use history::write_history;

// Crate-level exports - Input parsing
pub use input::{InputError, move_cursor, parse_cell};

// Crate-level exports - Front ends
pub use prompt::PromptSession;
pub use tui::run_tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types
pub use noughts_core::{
    Board, GameEngine, GameError, GameEvent, GameStatus, GameSummary, MoveError, Observer,
    Outcome, Player, PlayerEntry, PlayerSlot, Roster, SetupError, Symbol,
};
