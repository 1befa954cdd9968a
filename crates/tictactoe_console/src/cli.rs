//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a scripted computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a scripted computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a JSON game configuration (defaults to an empty 3x3 board)
    pub config: Option<PathBuf>,

    /// Seed for the computer's random moves (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_config_and_seed() {
        let cli = Cli::try_parse_from(["tictactoe", "game.json", "--seed", "42"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.json")));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["tictactoe", "a.json", "b.json"]).is_err());
    }
}
