//! Console tic-tac-toe.
//!
//! Run with no arguments for an empty 3×3 board, or pass a JSON
//! configuration file. Logs go to stderr and are controlled by `RUST_LOG`.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rand::{SeedableRng, rngs::StdRng};
use tictactoe_console::{GameConfig, GameController, StdConsole};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let controller = GameController::new(&config, StdConsole::new(), rng)?;
    let outcome = controller.run()?;
    info!(winner = ?outcome.winner(), "Exiting");

    Ok(())
}

#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    match &cli.config {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(GameConfig::default())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
