//! Computer player: scripted moves first, random legal moves after.

use super::{ChosenMove, MoveSource, Player};
use crate::{Console, GameError, ScriptedMoves};
use rand::Rng;
use tictactoe_engine::{Board, Position, is_valid_move};
use tracing::{debug, instrument};

/// Rows addressable in algebraic notation (`A` through `Z`).
const NOTATION_ROWS: usize = 26;

/// Computer opponent.
///
/// Each turn it consumes its script until a move is legal. Once the
/// script is used up it draws random cells until it hits an empty one,
/// which picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R> {
    script: ScriptedMoves,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player with a script and a random source.
    pub fn new(script: ScriptedMoves, rng: R) -> Self {
        Self { script, rng }
    }

    /// Returns the script and its cursor.
    pub fn script(&self) -> &ScriptedMoves {
        &self.script
    }

    /// Draws random cells until one is a legal move.
    ///
    /// Returns `None` when no empty cell can be written in notation, so
    /// the draw loop always has something to find.
    #[instrument(skip_all)]
    pub fn random_move(&mut self, board: &Board) -> Option<String> {
        let size = board.size();
        let rows = size.min(NOTATION_ROWS);
        if !board.empty_cells().iter().any(|pos| pos.row < rows) {
            return None;
        }

        loop {
            let row = self.rng.random_range(0..rows);
            let col = self.rng.random_range(0..size);
            let notation = Position::new(row, col).to_algebraic()?;
            if is_valid_move(board, &notation) {
                debug!(notation = %notation, "Random move chosen");
                return Some(notation);
            }
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn choose_move(
        &mut self,
        board: &Board,
        _console: &mut dyn Console,
    ) -> Result<ChosenMove, GameError> {
        if let Some(notation) = self.script.next_valid(board) {
            return Ok(ChosenMove::new(notation, MoveSource::Scripted));
        }
        let notation = self.random_move(board).ok_or(GameError::NoMoveAvailable)?;
        Ok(ChosenMove::new(notation, MoveSource::Random))
    }
}
