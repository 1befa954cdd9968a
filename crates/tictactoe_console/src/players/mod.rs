//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, INVALID_MOVE_MESSAGE, MOVE_PROMPT};

use crate::{Console, GameError};
use derive_getters::Getters;
use tictactoe_engine::Board;

/// Where a move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MoveSource {
    /// Typed by the human player.
    Human,
    /// Taken from the computer's script.
    Scripted,
    /// Picked at random by the computer.
    Random,
}

/// A legal move in algebraic notation, tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct ChosenMove {
    /// Algebraic notation, already checked against the board.
    notation: String,
    /// How the move was chosen.
    source: MoveSource,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Chooses a legal move on `board`.
    ///
    /// The returned notation has passed
    /// [`is_valid_move`](tictactoe_engine::is_valid_move) for `board`.
    fn choose_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> Result<ChosenMove, GameError>;
}
