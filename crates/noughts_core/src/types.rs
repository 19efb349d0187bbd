//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::MoveError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Single-character marker identifying a player's moves.
///
/// Always stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Placeholder symbol of the first player.
    pub const X: Symbol = Symbol('X');
    /// Placeholder symbol of the second player.
    pub const O: Symbol = Symbol('O');

    /// Creates a symbol, normalizing it to uppercase.
    ///
    /// Characters whose uppercase form spans several characters keep their
    /// original form.
    pub fn new(c: char) -> Self {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Self(u),
            _ => Self(c),
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Free cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Converts an index to `(row, col)`.
    pub fn row_col(index: usize) -> Option<(usize, usize)> {
        (index < CELL_COUNT).then_some((index / 3, index % 3))
    }

    /// True iff `index` names a cell and that cell is empty.
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Marks the cell at `index` with `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`] when the
    /// move is not valid. The board is untouched in that case.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, symbol: Symbol) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfRange { index }),
            Some(Cell::Occupied(_)) => Err(MoveError::Occupied { index }),
            Some(cell) => {
                *cell = Cell::Occupied(symbol);
                Ok(())
            }
        }
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_cells().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as three rows; empty cells show their 1-based number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
