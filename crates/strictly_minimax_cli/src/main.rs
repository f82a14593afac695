//! Strictly Minimax - terminal tic-tac-toe
//!
//! Play against an unbeatable engine, or ask it for a move.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax_cli::{AppConfig, Cli, Command, Terminal, init_tracing, suggest};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    init_tracing(&config);
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Play { mode } => run_play(config.with_mode(mode)),
        Command::Suggest { board } => {
            println!("{}", suggest(&board)?);
            Ok(())
        }
    }
}

/// Runs the interactive game on stdin/stdout.
fn run_play(config: AppConfig) -> Result<()> {
    info!(mode = %config.mode(), "Starting terminal game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Terminal::new(stdin.lock(), stdout.lock(), &config).run()
}
