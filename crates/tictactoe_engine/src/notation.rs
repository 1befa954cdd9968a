//! Algebraic move notation.
//!
//! A move is written as one uppercase row letter followed by a 1-based
//! column number: `A1` is the top-left cell, `B3` is row 1, column 2.

use crate::Position;
use tracing::instrument;

/// Decodes algebraic notation into a zero-based position.
///
/// Returns `None` when the input is not a letter `A`-`Z` followed by one
/// or more ASCII digits, or when the column number is zero. Rows and
/// columns are not checked against any board; `Z9` decodes to `(25, 8)`.
#[instrument]
pub fn algebraic_to_row_col(notation: &str) -> Option<Position> {
    let mut chars = notation.chars();
    let row_letter = chars.next()?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !row_letter.is_ascii_uppercase() {
        return None;
    }

    let row = usize::from(row_letter as u8 - b'A');
    let col = digits.parse::<usize>().ok()?.checked_sub(1)?;
    Some(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_corner_and_center() {
        assert_eq!(algebraic_to_row_col("A1"), Some(Position::new(0, 0)));
        assert_eq!(algebraic_to_row_col("B2"), Some(Position::new(1, 1)));
        assert_eq!(algebraic_to_row_col("C3"), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_multi_digit_column() {
        assert_eq!(algebraic_to_row_col("D12"), Some(Position::new(3, 11)));
        assert_eq!(algebraic_to_row_col("A01"), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_out_of_range_rows_still_decode() {
        assert_eq!(algebraic_to_row_col("Z9"), Some(Position::new(25, 8)));
    }

    #[test]
    fn test_malformed_notation_is_absent() {
        for notation in ["", "A", "1A", "a1", "A0", "A00", "AA1", "A1x", "A-1", " A1", "Ä1"] {
            assert_eq!(algebraic_to_row_col(notation), None, "{notation:?}");
        }
    }

    #[test]
    fn test_column_overflow_is_absent() {
        assert_eq!(algebraic_to_row_col("A99999999999999999999999"), None);
    }

    #[test]
    fn test_left_inverse_of_encoding() {
        for row in 0..26 {
            for col in 0..12 {
                let pos = Position::new(row, col);
                let notation = pos.to_algebraic().expect("row within A-Z");
                assert_eq!(algebraic_to_row_col(&notation), Some(pos));
            }
        }
    }

    #[test]
    fn test_rows_past_z_have_no_notation() {
        assert_eq!(Position::new(26, 0).to_algebraic(), None);
    }
}
