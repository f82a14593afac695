//! Tests for loading the front end configuration from disk.

use std::io::Write;
use strictly_minimax::GameMode;
use strictly_minimax_cli::{AppConfig, Terminal};

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.mode(), &GameMode::HumanVsAi);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_file_values_are_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human_vs_human\"").unwrap();
    writeln!(file, "show_coordinates = false").unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.mode(), &GameMode::HumanVsHuman);
    assert!(!config.show_coordinates());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_invalid_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = 3").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_configured_mode_drives_terminal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human_vs_human\"").unwrap();
    let config = AppConfig::from_file(file.path()).unwrap();

    let mut output = Vec::new();
    let mut terminal = Terminal::new(&b"5\n1\n"[..], &mut output, &config);
    terminal.run().unwrap();
    assert_eq!(terminal.state().history().len(), 2);

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Tic-Tac-Toe (human_vs_human)"));
    assert!(!text.contains("Computer plays"));
    assert!(text.contains("X's turn"));
}
