//! Board construction and placement errors.

use crate::Mark;

/// Error raised while building a board or placing a letter.
///
/// Query functions never produce these; notation that fails to decode is
/// reported as `None` by [`crate::algebraic_to_row_col`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board text contains a character that is neither empty nor a configured letter.
    #[display("Invalid board format: {:?} is not an empty cell or a configured letter", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// The board text length is not a positive perfect square.
    #[display("Invalid board format: {} cells is not a positive perfect square", _0)]
    NotSquare(#[error(not(source))] usize),

    /// A letter was not exactly one character long.
    #[display("Letter {:?} must be exactly one character", _0)]
    InvalidLetter(#[error(not(source))] String),

    /// A letter was the empty-cell token.
    #[display("Letters must not be the empty cell")]
    EmptyLetter,

    /// Player and computer were given the same letter.
    #[display("Player and computer letters must differ (both are {})", _0)]
    DuplicateLetters(#[error(not(source))] Mark),

    /// Notation that does not decode to a position.
    #[display("Notation {:?} does not name a cell", _0)]
    UndecodableNotation(#[error(not(source))] String),

    /// A decoded position maps past the end of the board.
    #[display("Index {} is outside a board of {} cells", index, len)]
    IndexOutOfBounds {
        /// Flat index computed from the notation.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },
}
