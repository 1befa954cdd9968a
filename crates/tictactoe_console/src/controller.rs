//! Turn-by-turn game orchestration.

use crate::players::{ComputerPlayer, HumanPlayer, MoveSource, Player};
use crate::{ConfigError, Console, GameConfig, GameError, ScriptedMoves};
use derive_getters::Getters;
use rand::Rng;
use tictactoe_engine::{Board, Marks, is_full, winner};
use tracing::{debug, info, instrument};

/// Shown after every accepted player move, including one that ends the game.
pub const PAUSE_PROMPT: &str = "Press enter to show computer's move...";

/// Which side a letter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Side {
    /// The human at the console.
    Player,
    /// The scripted/random opponent.
    Computer,
}

/// Controller state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the human to enter a move.
    AwaitingPlayerMove,
    /// The computer moves next.
    AwaitingComputerMove,
    /// The board is won or full.
    GameOver,
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameOutcome {
    /// Winning side, or `None` for a draw.
    winner: Option<Side>,
    /// The final board.
    board: Board,
}

/// Drives a single game between a [`HumanPlayer`] and a [`ComputerPlayer`].
///
/// The side playing `X` moves first and turns alternate strictly. The game
/// ends as soon as a move wins or fills the board.
pub struct GameController<C, R> {
    marks: Marks,
    board: Board,
    state: TurnState,
    human: HumanPlayer,
    computer: ComputerPlayer<R>,
    console: C,
}

impl<C: Console, R: Rng> GameController<C, R> {
    /// Sets up a game from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the letters or board text are invalid.
    #[instrument(skip_all)]
    pub fn new(config: &GameConfig, console: C, rng: R) -> Result<Self, ConfigError> {
        let marks = config.marks()?;
        let board = config.initial_board()?;
        let opening = if config.player_moves_first() {
            TurnState::AwaitingPlayerMove
        } else {
            TurnState::AwaitingComputerMove
        };
        let state = if is_over(&board) { TurnState::GameOver } else { opening };
        debug!(?state, size = board.size(), "Game initialized");

        Ok(Self {
            marks,
            board,
            state,
            human: HumanPlayer::new(),
            computer: ComputerPlayer::new(
                ScriptedMoves::new(config.computer_moves().clone()),
                rng,
            ),
            console,
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the game to completion and announces the result.
    ///
    /// # Errors
    ///
    /// Fails only if the console fails or input closes mid-game.
    #[instrument(skip_all)]
    pub fn run(mut self) -> Result<GameOutcome, GameError> {
        info!(player = %self.marks.player(), computer = %self.marks.computer(), "Starting game");
        self.announce()?;

        loop {
            self.state = match self.state {
                TurnState::AwaitingPlayerMove => self.player_turn()?,
                TurnState::AwaitingComputerMove => self.computer_turn()?,
                TurnState::GameOver => break,
            };
        }

        self.finish()
    }

    fn announce(&mut self) -> Result<(), GameError> {
        self.console.write_line(&format!(
            "Player is {}, Computer is {}",
            self.marks.player(),
            self.marks.computer()
        ))?;

        let script = self.computer.script().moves();
        if !script.is_empty() {
            let line = format!("Computer will make the following moves: {}", script.join(", "));
            self.console.write_line(&line)?;
        }

        self.show_board()
    }

    fn player_turn(&mut self) -> Result<TurnState, GameError> {
        let chosen = self.human.choose_move(&self.board, &mut self.console)?;
        self.board = self.board.place_letter(self.marks.player(), chosen.notation())?;
        self.show_board()?;

        self.console.prompt(PAUSE_PROMPT)?;
        Ok(self.next_state(Side::Player))
    }

    fn computer_turn(&mut self) -> Result<TurnState, GameError> {
        let chosen = self.computer.choose_move(&self.board, &mut self.console)?;
        self.board = self
            .board
            .place_letter(self.marks.computer(), chosen.notation())?;

        let line = match chosen.source() {
            MoveSource::Random => format!("Computer's move (random): {}", chosen.notation()),
            _ => format!("Computer's move: {}", chosen.notation()),
        };
        self.console.write_line(&line)?;
        self.show_board()?;

        Ok(self.next_state(Side::Computer))
    }

    fn next_state(&self, moved: Side) -> TurnState {
        match moved {
            _ if is_over(&self.board) => TurnState::GameOver,
            Side::Player => TurnState::AwaitingComputerMove,
            Side::Computer => TurnState::AwaitingPlayerMove,
        }
    }

    fn show_board(&mut self) -> Result<(), GameError> {
        self.console.write_line(&self.board.to_string())?;
        Ok(())
    }

    fn finish(mut self) -> Result<GameOutcome, GameError> {
        self.show_board()?;

        let side = winner(&self.board).map(|mark| {
            if mark == self.marks.player() {
                Side::Player
            } else {
                Side::Computer
            }
        });
        let message = match side {
            Some(side) => format!("{} won!", side),
            None => "It's a draw!".to_string(),
        };
        self.console.write_line(&message)?;
        info!(winner = ?side, "Game over");

        Ok(GameOutcome {
            winner: side,
            board: self.board,
        })
    }
}

fn is_over(board: &Board) -> bool {
    is_full(board) || winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryConsole;
    use rand::{SeedableRng, rngs::StdRng};

    fn controller<'a>(
        json: &str,
        console: &'a mut MemoryConsole,
    ) -> GameController<&'a mut MemoryConsole, StdRng> {
        let config = GameConfig::from_json(json).unwrap();
        GameController::new(&config, console, StdRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn test_player_x_opens() {
        let mut console = MemoryConsole::default();
        let game = controller(
            r#"{"board": "         ", "playerLetter": "X", "computerLetter": "O"}"#,
            &mut console,
        );
        assert_eq!(game.state(), TurnState::AwaitingPlayerMove);
    }

    #[test]
    fn test_computer_opens_when_player_is_not_x() {
        let mut console = MemoryConsole::default();
        let game = controller(
            r#"{"board": "         ", "playerLetter": "O", "computerLetter": "X"}"#,
            &mut console,
        );
        assert_eq!(game.state(), TurnState::AwaitingComputerMove);
    }

    #[test]
    fn test_finished_board_starts_game_over() {
        let mut console = MemoryConsole::default();
        let game = controller(
            r#"{"board": "OOOXX    ", "playerLetter": "X", "computerLetter": "O"}"#,
            &mut console,
        );
        assert_eq!(game.state(), TurnState::GameOver);

        let outcome = game.run().unwrap();
        assert_eq!(*outcome.winner(), Some(Side::Computer));
        assert_eq!(console.output().last().map(String::as_str), Some("Computer won!"));
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Player.to_string(), "Player");
        assert_eq!(Side::Computer.to_string(), "Computer");
    }
}
