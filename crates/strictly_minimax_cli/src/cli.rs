//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::GameMode;

/// Strictly Minimax - tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "strictly_minimax.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode (human_vs_ai or human_vs_human); overrides the config
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Print the engine's move for O on a given board
    Suggest {
        /// Nine cells in row-major order, e.g. "X.. .O. ..X"
        #[arg(short, long)]
        board: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_mode() {
        let cli = Cli::try_parse_from(["strictly_minimax", "play", "--mode", "human_vs_human"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Play {
                mode: Some(GameMode::HumanVsHuman)
            }
        ));
        assert_eq!(cli.config, std::path::PathBuf::from("strictly_minimax.toml"));
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::try_parse_from([
            "strictly_minimax",
            "--config",
            "other.toml",
            "suggest",
            "--board",
            "X.. ... ...",
        ])
        .unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Command::Suggest { board } if board == "X.. ... ..."));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["strictly_minimax", "play", "--mode", "ai_vs_ai"]).is_err());
    }
}
