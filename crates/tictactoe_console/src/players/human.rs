//! Human player reading moves from the console.

use super::{ChosenMove, MoveSource, Player};
use crate::{Console, GameError};
use tictactoe_engine::{Board, is_valid_move};
use tracing::{debug, instrument};

/// Prompt shown when asking for the player's move.
pub const MOVE_PROMPT: &str = "What's your move? > ";

/// Shown after any input that is not a legal move.
pub const INVALID_MOVE_MESSAGE: &str =
    "Your move must be in a valid format, and it must specify an existing empty cell!";

/// Human player typing algebraic notation.
///
/// Re-prompts until the input is a legal move; there is no retry limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a human player.
    pub fn new() -> Self {
        Self
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all)]
    fn choose_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> Result<ChosenMove, GameError> {
        loop {
            let input = console.prompt(MOVE_PROMPT)?;
            if is_valid_move(board, &input) {
                debug!(notation = %input, "Player move accepted");
                return Ok(ChosenMove::new(input, MoveSource::Human));
            }
            debug!(input = %input, "Player move rejected");
            console.write_line(INVALID_MOVE_MESSAGE)?;
        }
    }
}
