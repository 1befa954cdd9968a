//! Console tic-tac-toe against a scripted-then-random computer.
//!
//! # Architecture
//!
//! - **Config**: JSON game setup (board, letters, scripted computer moves)
//! - **Script**: cursor over the computer's predetermined moves
//! - **Players**: human input over a [`Console`], computer script with random fallback
//! - **Controller**: turn state machine driving the board engine
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tictactoe_console::{GameConfig, GameController, MemoryConsole, Side};
//!
//! let config = GameConfig::from_json(
//!     r#"{"board": "XX OO    ", "playerLetter": "X", "computerLetter": "O", "computerMoves": []}"#,
//! )?;
//! let console = MemoryConsole::new(["A3", ""]);
//! let controller = GameController::new(&config, console, StdRng::seed_from_u64(7))?;
//! let outcome = controller.run()?;
//! assert_eq!(*outcome.winner(), Some(Side::Player));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod controller;
mod error;
mod players;
mod script;

pub use config::GameConfig;
pub use console::{Console, MemoryConsole, StdConsole};
pub use controller::{GameController, GameOutcome, PAUSE_PROMPT, Side, TurnState};
pub use error::{ConfigError, ConsoleError, GameError};
pub use players::{
    ChosenMove, ComputerPlayer, HumanPlayer, INVALID_MOVE_MESSAGE, MOVE_PROMPT, MoveSource,
    Player,
};
pub use script::ScriptedMoves;
