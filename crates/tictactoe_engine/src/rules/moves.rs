//! Move legality.

use crate::{Board, Mark, notation::algebraic_to_row_col};
use tracing::instrument;

/// Checks that `notation` decodes to an on-board, empty cell.
///
/// Malformed notation, out-of-range rows or columns, and occupied cells
/// are all simply illegal; nothing here fails.
#[instrument]
pub fn is_valid_move(board: &Board, notation: &str) -> bool {
    let Some(pos) = algebraic_to_row_col(notation) else {
        return false;
    };
    board.get(pos.row, pos.col) == Some(Mark::EMPTY)
}
