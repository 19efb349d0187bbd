//! Input adapter: turns raw user input into cell choices.

use crossterm::event::KeyCode;
use derive_more::{Display, Error};
use noughts_core::CELL_COUNT;
use tracing::instrument;

/// Input that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("please enter a cell number (1-9)")]
    Empty,
    /// Not a number.
    #[display("'{input}' is not a number")]
    NotANumber {
        /// What was typed, trimmed.
        input: String,
    },
    /// A number outside 1-9.
    #[display("{number} is not between 1 and 9")]
    OutOfRange {
        /// Parsed number.
        number: i64,
    },
}

/// Parses a 1-based cell number (as shown on the board) into a 0-based index.
///
/// Occupancy is not checked here; the engine decides whether the move is legal.
///
/// # Errors
///
/// Returns [`InputError`] when the input is empty, not a number, or outside 1-9.
#[instrument]
pub fn parse_cell(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let number: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    if (1..=CELL_COUNT as i64).contains(&number) {
        Ok(number as usize - 1)
    } else {
        Err(InputError::OutOfRange { number })
    }
}

/// Moves a board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    row * 3 + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_accepts_one_to_nine() {
        for n in 1..=9 {
            assert_eq!(parse_cell(&n.to_string()), Ok(n - 1));
        }
        assert_eq!(parse_cell("  5\n"), Ok(4));
    }

    #[test]
    fn test_parse_cell_rejects_garbage() {
        assert_eq!(parse_cell(""), Err(InputError::Empty));
        assert_eq!(parse_cell("   "), Err(InputError::Empty));
        assert_eq!(
            parse_cell("x"),
            Err(InputError::NotANumber {
                input: "x".to_string()
            })
        );
        assert_eq!(parse_cell("0"), Err(InputError::OutOfRange { number: 0 }));
        assert_eq!(parse_cell("10"), Err(InputError::OutOfRange { number: 10 }));
        assert_eq!(parse_cell("-3"), Err(InputError::OutOfRange { number: -3 }));
    }

    #[test]
    fn test_move_cursor() {
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
        assert_eq!(move_cursor(2, KeyCode::Char('a')), 2);
    }
}
