//! Error types for loading and playing a game.

use derive_more::{Display, Error};
use tictactoe_engine::BoardError;
use tracing::instrument;

/// Configuration error with location tracking.
///
/// Always fatal: raised before any game state exists.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardError> for ConfigError {
    #[track_caller]
    fn from(err: BoardError) -> Self {
        Self::new(err.to_string())
    }
}

/// Console input/output failure.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The input stream ended while waiting for the player.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Error that ends a game in progress.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// The console failed or ran out of input.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// A chosen move could not be placed.
    #[display("{}", _0)]
    Board(BoardError),

    /// A player was asked to move on a board with no addressable empty cell.
    #[display("No legal move is available")]
    NoMoveAvailable,
}

impl From<ConsoleError> for GameError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
