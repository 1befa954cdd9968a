//! Cell tokens and the configured player/computer letter pair.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single-character cell token.
///
/// [`Mark::EMPTY`] (a space) marks an unoccupied cell; any other
/// character is a player's letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Mark(char);

impl Mark {
    /// The unoccupied cell.
    pub const EMPTY: Mark = Mark(' ');

    /// Wraps a character as a mark.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Checks whether this is the empty-cell token.
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<char> for Mark {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.0.to_string()
    }
}

impl TryFrom<&str> for Mark {
    type Error = BoardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(BoardError::InvalidLetter(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mark {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

/// The two letters in play: one for the human, one for the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    player: Mark,
    computer: Mark,
}

impl Marks {
    /// Creates a letter pair.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyLetter`] if either letter is the empty
    /// cell, or [`BoardError::DuplicateLetters`] if both are the same.
    #[instrument]
    pub fn new(player: Mark, computer: Mark) -> Result<Self, BoardError> {
        if player.is_empty() || computer.is_empty() {
            return Err(BoardError::EmptyLetter);
        }
        if player == computer {
            return Err(BoardError::DuplicateLetters(player));
        }
        Ok(Self { player, computer })
    }

    /// Returns the human player's letter.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// Returns the computer's letter.
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// Checks whether a mark may appear on a board using these letters.
    pub fn allows(&self, mark: Mark) -> bool {
        mark.is_empty() || mark == self.player || mark == self.computer
    }
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            player: Mark('X'),
            computer: Mark('O'),
        }
    }
}
