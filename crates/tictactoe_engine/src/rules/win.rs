//! Win detection for N×N boards.

use crate::{Board, Mark};
use tracing::instrument;

/// Returns the mark that fills a whole line, if any.
///
/// Lines are checked in a fixed order: rows top to bottom, columns left
/// to right, the main diagonal, then the anti-diagonal. The first fully
/// populated, non-empty line decides the result. Boards whose cell count
/// is not a positive perfect square have no winner.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    if !board.is_square() {
        return None;
    }
    let cells = board.cells();

    lines(board.size()).find_map(|line| {
        let first = cells[line[0]];
        (!first.is_empty() && line.iter().all(|&i| cells[i] == first)).then_some(first)
    })
}

/// Flat indices of every line, in checking order.
fn lines(size: usize) -> impl Iterator<Item = Vec<usize>> {
    let rows = (0..size).map(move |row| (0..size).map(|col| row * size + col).collect::<Vec<_>>());
    let cols = (0..size).map(move |col| (0..size).map(|row| row * size + col).collect::<Vec<_>>());
    let main = (0..size).map(|i| i * size + i).collect::<Vec<_>>();
    let anti = (0..size).map(|i| i * size + (size - 1 - i)).collect::<Vec<_>>();

    rows.chain(cols).chain([main, anti])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marks;

    fn board(text: &str) -> Board {
        Board::from_text(text, &Marks::default()).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::empty(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXXOO    ")), Some(Mark::new('X')));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO  O XO ")), Some(Mark::new('O')));
    }

    #[test]
    fn test_winner_main_diagonal() {
        assert_eq!(winner(&board("OX  OX  O")), Some(Mark::new('O')));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX X X  ")), Some(Mark::new('X')));
    }

    #[test]
    fn test_lines_checked_in_order() {
        // Two complete lines only occur on boards no legal game reaches.
        assert_eq!(winner(&board("OOO   XXX")), Some(Mark::new('O')));
        assert_eq!(winner(&board("XXX   OOO")), Some(Mark::new('X')));
        assert_eq!(winner(&board("O XO XO X")), Some(Mark::new('O')));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        assert_eq!(winner(&board("XX       ")), None);
    }

    #[test]
    fn test_non_square_board_has_no_winner() {
        let lopsided = Board::generate(2, 3, Mark::new('X'));
        assert_eq!(winner(&lopsided), None);
    }

    #[test]
    fn test_four_by_four_column() {
        let b = board("X O X   X  OX  O");
        assert_eq!(winner(&b), Some(Mark::new('X')));
    }

    #[test]
    fn test_single_cell_board() {
        assert_eq!(winner(&board("O")), Some(Mark::new('O')));
        assert_eq!(winner(&board(" ")), None);
    }
}
