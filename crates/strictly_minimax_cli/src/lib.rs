//! Strictly Minimax terminal front end.
//!
//! A thin presentation layer over `strictly_minimax`: argument parsing,
//! configuration, tracing setup and a line-based game loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod suggest;
mod terminal;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Commands
pub use suggest::suggest;
pub use terminal::{Command as TerminalCommand, CommandError, Terminal, render_board};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
