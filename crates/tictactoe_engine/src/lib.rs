//! Board engine for N×N tic-tac-toe.
//!
//! Boards are flat, row-major sequences of [`Mark`]s whose length is a
//! perfect square. Every operation is a pure function of its inputs:
//! placing a letter returns a new [`Board`] and leaves the old one intact.
//!
//! # Architecture
//!
//! - **Marks**: single-character cell tokens and the configured letter pair
//! - **Board**: construction, text round-trip, coordinate conversion, placement
//! - **Notation**: algebraic moves such as `A1` or `C3`
//! - **Rules**: winner, full-board, and move-legality queries
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, Marks, rules};
//!
//! let marks = Marks::default();
//! let board = Board::from_text("XXXOO    ", &marks)?;
//! assert_eq!(rules::winner(&board), Some(Mark::new('X')));
//! assert!(rules::is_valid_move(&board, "C3"));
//! # Ok::<(), tictactoe_engine::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod mark;
pub mod notation;
mod position;
pub mod rules;

pub use board::Board;
pub use error::BoardError;
pub use mark::{Mark, Marks};
pub use notation::algebraic_to_row_col;
pub use position::Position;
pub use rules::{is_draw, is_full, is_valid_move, winner};
