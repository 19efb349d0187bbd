//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions of a board snapshot, kept apart from board
//! storage so the engine can swap them without touching its own logic.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{StandardWinStrategy, WIN_COMBINATIONS, WinStrategy};
