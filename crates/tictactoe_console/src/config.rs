//! Game configuration loaded from JSON.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Board, Mark, Marks};
use tracing::{debug, info, instrument};

/// Starting position, letters, and the computer's scripted moves.
///
/// Field names follow the JSON file format:
///
/// ```json
/// {
///   "board": "         ",
///   "playerLetter": "X",
///   "computerLetter": "O",
///   "computerMoves": ["B2", "A1"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Board text, one character per cell, row-major.
    board: String,

    /// The human player's letter.
    player_letter: Mark,

    /// The computer's letter.
    computer_letter: Mark,

    /// Moves the computer tries in order before playing randomly.
    #[serde(default)]
    computer_moves: Vec<String>,
}

impl Default for GameConfig {
    /// Empty 3×3 board, player `X`, computer `O`, no scripted moves.
    fn default() -> Self {
        let marks = Marks::default();
        Self {
            board: Board::empty(3).to_text(),
            player_letter: marks.player(),
            computer_letter: marks.computer(),
            computer_moves: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Loads and validates configuration from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Configuration file not found: {}", e))
        })?;

        Self::from_json(&content)
    }

    /// Parses and validates configuration from JSON text.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            player = %config.player_letter,
            computer = %config.computer_letter,
            scripted_moves = config.computer_moves.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that the letters form a valid pair and the board parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_board().map(|_| ())
    }

    /// Returns the validated letter pair.
    pub fn marks(&self) -> Result<Marks, ConfigError> {
        Ok(Marks::new(self.player_letter, self.computer_letter)?)
    }

    /// Parses the starting board using the configured letters.
    pub fn initial_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::from_text(&self.board, &self.marks()?)?)
    }

    /// The player moves first when playing `X`; otherwise the computer does.
    pub fn player_moves_first(&self) -> bool {
        self.player_letter == Mark::new('X')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board(), "         ");
        assert_eq!(*config.player_letter(), Mark::new('X'));
        assert_eq!(*config.computer_letter(), Mark::new('O'));
        assert!(config.computer_moves().is_empty());
        assert!(config.player_moves_first());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = GameConfig::from_json(
            r#"{"board": "X   O    ", "playerLetter": "O", "computerLetter": "X",
                "computerMoves": ["A1", "C3"]}"#,
        )
        .unwrap();
        assert_eq!(config.computer_moves(), &vec!["A1".to_string(), "C3".to_string()]);
        assert!(!config.player_moves_first());
        assert_eq!(config.initial_board().unwrap().size(), 3);
    }

    #[test]
    fn test_computer_moves_default_to_empty() {
        let config = GameConfig::from_json(
            r#"{"board": "    ", "playerLetter": "X", "computerLetter": "O"}"#,
        )
        .unwrap();
        assert!(config.computer_moves().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_multi_character_letter_is_error() {
        let result = GameConfig::from_json(
            r#"{"board": "         ", "playerLetter": "XX", "computerLetter": "O"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_equal_letters_are_error() {
        let result = GameConfig::from_json(
            r#"{"board": "         ", "playerLetter": "X", "computerLetter": "X"}"#,
        );
        assert!(result.unwrap_err().message.contains("must differ"));
    }

    #[test]
    fn test_invalid_board_is_error() {
        let result = GameConfig::from_json(
            r#"{"board": "XO?      ", "playerLetter": "X", "computerLetter": "O"}"#,
        );
        assert!(result.unwrap_err().message.contains("Invalid board format"));

        let result = GameConfig::from_json(
            r#"{"board": "        ", "playerLetter": "X", "computerLetter": "O"}"#,
        );
        assert!(result.is_err());
    }
}
