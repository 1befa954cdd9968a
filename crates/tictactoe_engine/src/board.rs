//! Flat N×N board values.

use crate::{BoardError, Mark, Marks, Position, notation::algebraic_to_row_col};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe board stored as a row-major sequence of marks.
///
/// The side length is the square root of the cell count. Boards built
/// with [`Board::from_text`] are always positive perfect squares;
/// [`Board::generate`] accepts any dimensions and leaves square-dependent
/// queries to report "no answer" for lopsided boards.
///
/// Boards are values: [`Board::set_cell`] and [`Board::place_letter`]
/// return a new board and never touch `self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: Vec<Mark>,
}

impl Board {
    /// Creates a `rows`×`cols` board with every cell set to `fill`.
    #[instrument]
    pub fn generate(rows: usize, cols: usize, fill: Mark) -> Self {
        Self {
            cells: vec![fill; rows * cols],
        }
    }

    /// Creates an empty `size`×`size` board.
    pub fn empty(size: usize) -> Self {
        Self::generate(size, size, Mark::EMPTY)
    }

    /// Parses a board from its text form, one character per cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCharacter`] if a character is not the
    /// empty cell or one of `marks`, and [`BoardError::NotSquare`] if the
    /// character count is not a positive perfect square.
    #[instrument(skip(marks))]
    pub fn from_text(text: &str, marks: &Marks) -> Result<Self, BoardError> {
        let cells = text
            .chars()
            .map(Mark::new)
            .map(|mark| {
                if marks.allows(mark) {
                    Ok(mark)
                } else {
                    Err(BoardError::InvalidCharacter(mark.as_char()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !is_positive_square(cells.len()) {
            return Err(BoardError::NotSquare(cells.len()));
        }

        debug!(size = cells.len().isqrt(), "Board parsed");
        Ok(Self { cells })
    }

    /// Returns the text form accepted by [`Board::from_text`].
    pub fn to_text(&self) -> String {
        self.cells.iter().map(|mark| mark.as_char()).collect()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Side length: the integer square root of the cell count.
    pub fn size(&self) -> usize {
        self.cells.len().isqrt()
    }

    /// Checks whether the cell count is a positive perfect square.
    pub fn is_square(&self) -> bool {
        is_positive_square(self.cells.len())
    }

    /// Converts a coordinate to a flat index (`row * size + col`).
    ///
    /// Neither coordinate is range-checked.
    pub fn row_col_to_index(&self, row: usize, col: usize) -> usize {
        row * self.size() + col
    }

    /// Converts a flat index back to a coordinate.
    ///
    /// # Panics
    ///
    /// Panics on a board with no cells.
    pub fn index_to_row_col(&self, index: usize) -> Position {
        let size = self.size();
        Position::new(index / size, index % size)
    }

    /// Returns the mark at a coordinate, or `None` if it lies off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        let size = self.size();
        if row >= size || col >= size {
            return None;
        }
        self.cells.get(self.row_col_to_index(row, col)).copied()
    }

    /// Returns a copy of this board with `letter` written at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row * size + col` is past the last cell. Validate the
    /// move with [`crate::is_valid_move`] first.
    #[instrument(skip(self))]
    pub fn set_cell(&self, letter: Mark, row: usize, col: usize) -> Board {
        let mut cells = self.cells.clone();
        cells[self.row_col_to_index(row, col)] = letter;
        Self { cells }
    }

    /// Returns a copy of this board with `letter` placed at `notation`.
    ///
    /// The notation must already have passed [`crate::is_valid_move`].
    /// For anything else the result is whatever the flat index
    /// `row * size + col` points at: `A4` on a 3×3 board writes the first
    /// cell of row `B`, and an occupied cell is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UndecodableNotation`] if the notation does not
    /// decode, and [`BoardError::IndexOutOfBounds`] if the flat index is
    /// past the last cell or too large to compute (reported as `usize::MAX`).
    #[instrument(skip(self))]
    pub fn place_letter(&self, letter: Mark, notation: &str) -> Result<Board, BoardError> {
        let pos = algebraic_to_row_col(notation)
            .ok_or_else(|| BoardError::UndecodableNotation(notation.to_string()))?;

        let len = self.cells.len();
        let index = pos
            .row
            .checked_mul(self.size())
            .and_then(|start| start.checked_add(pos.col))
            .ok_or(BoardError::IndexOutOfBounds {
                index: usize::MAX,
                len,
            })?;
        if index >= len {
            return Err(BoardError::IndexOutOfBounds { index, len });
        }

        Ok(self.set_cell(letter, pos.row, pos.col))
    }

    /// Returns every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let size = self.size();
        (0..size * size)
            .filter(|&index| self.cells[index].is_empty())
            .map(|index| Position::new(index / size, index % size))
            .collect()
    }
}

fn is_positive_square(len: usize) -> bool {
    let root = len.isqrt();
    len > 0 && root * root == len
}

/// Row label for console output: `A`, `B`, `C`, ...
fn row_label(row: usize) -> char {
    u32::try_from(row)
        .ok()
        .and_then(|row| char::from_u32(u32::from(b'A') + row))
        .unwrap_or('?')
}

/// Renders the board with 1-based column numbers across the top and
/// row letters down the side.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();

        write!(f, "  ")?;
        for col in 1..=size {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;

        for row in 0..size {
            write!(f, "{} ", row_label(row))?;
            for col in 0..size {
                write!(f, "{} ", self.cells[row * size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
