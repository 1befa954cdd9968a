//! Scripted computer moves.

use tictactoe_engine::{Board, is_valid_move};
use tracing::{debug, instrument};

/// The computer's predetermined moves with a cursor marking the next one.
///
/// The move list itself never changes; consuming a move, valid or not,
/// only advances the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedMoves {
    moves: Vec<String>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Creates a script positioned at its first move.
    pub fn new(moves: Vec<String>) -> Self {
        Self { moves, cursor: 0 }
    }

    /// Every scripted move, consumed or not.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Moves not yet consumed.
    pub fn remaining(&self) -> &[String] {
        &self.moves[self.cursor..]
    }

    /// True once every move has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    /// Consumes moves until one is legal on `board` and returns it.
    ///
    /// Illegal entries are consumed and dropped without being reported.
    /// Returns `None` once the script runs out.
    #[instrument(skip(self, board), fields(cursor = self.cursor))]
    pub fn next_valid(&mut self, board: &Board) -> Option<String> {
        while let Some(notation) = self.moves.get(self.cursor) {
            self.cursor += 1;
            if is_valid_move(board, notation) {
                debug!(notation = %notation, "Using scripted move");
                return Some(notation.clone());
            }
            debug!(notation = %notation, "Skipping invalid scripted move");
        }
        None
    }
}
