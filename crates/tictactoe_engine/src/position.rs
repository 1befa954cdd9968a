//! Zero-based board coordinates.

use serde::{Deserialize, Serialize};

/// A cell coordinate: zero-based row and column.
///
/// A position is only meaningful relative to a board; decoding notation
/// such as `Z9` yields a position that may lie outside a small board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 is row `A`).
    pub row: usize,
    /// Column index (0 is column `1`).
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Encodes this position in algebraic notation, e.g. `(1, 2)` as `B3`.
    ///
    /// Returns `None` for rows past `Z`.
    pub fn to_algebraic(self) -> Option<String> {
        let row = u8::try_from(self.row).ok().filter(|row| *row < 26)?;
        Some(format!("{}{}", char::from(b'A' + row), self.col + 1))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_algebraic() {
            Some(notation) => write!(f, "{}", notation),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
