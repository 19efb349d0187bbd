//! Win detection for tic-tac-toe.

use crate::types::{Board, Cell};
use tracing::instrument;

/// The eight index triples that win when uniformly occupied.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Policy deciding whether a board holds a winning line.
///
/// Implementations look at the whole board and keep no state between calls,
/// so the engine can ask at any time without side effects.
pub trait WinStrategy: std::fmt::Debug {
    /// Returns true if the board contains a winning line.
    fn check_winner(&self, board: &Board) -> bool;

    /// Returns the cells of the winning line, if the strategy can name one.
    fn winning_line(&self, _board: &Board) -> Option<[usize; 3]> {
        None
    }
}

/// Three identical symbols along a row, column or diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardWinStrategy;

impl WinStrategy for StandardWinStrategy {
    #[instrument(skip(board))]
    fn check_winner(&self, board: &Board) -> bool {
        self.winning_line(board).is_some()
    }

    fn winning_line(&self, board: &Board) -> Option<[usize; 3]> {
        WIN_COMBINATIONS.into_iter().find(|&[a, b, c]| {
            let first = board.get(a);
            matches!(first, Some(Cell::Occupied(_)))
                && first == board.get(b)
                && first == board.get(c)
        })
    }
}
