//! Draw detection for tic-tac-toe.

use super::win::WinStrategy;
use crate::types::Board;
use tracing::instrument;

/// A draw is a full board without a winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, strategy: &dyn WinStrategy) -> bool {
    board.is_full() && !strategy.check_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StandardWinStrategy;
    use crate::types::Symbol;

    fn fill(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in layout.chars().enumerate() {
            board.apply_move(i, Symbol::new(c)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new(), &StandardWinStrategy));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = fill("XOXXOOOXX");
        assert!(board.is_full());
        assert!(!StandardWinStrategy.check_winner(&board));
        assert!(is_draw(&board, &StandardWinStrategy));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X X X / O O X / X O O
        let board = fill("XXXOOXXOO");
        assert!(board.is_full());
        assert!(!is_draw(&board, &StandardWinStrategy));
    }
}
