//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Every query is recomputed from
//! scratch; nothing is cached between turns.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::is_valid_move;
pub use win::winner;
