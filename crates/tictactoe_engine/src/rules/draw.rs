//! Draw detection.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell remains).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|mark| !mark.is_empty())
}

/// A full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marks;

    fn board(text: &str) -> Board {
        Board::from_text(text, &Marks::default()).unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board("XOXOXOXO ")));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&board("XXXXXXXXX")));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        assert!(is_draw(&board("XOXXOOOXX")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full, but X holds the anti-diagonal A3-B2-C1.
        let b = board("XOXOXOXXO");
        assert!(is_full(&b));
        assert!(!is_draw(&b));
    }
}
