//! Tests for loading console config files.

use std::io::Write;
use tictactoe_console::{ConsoleConfig, FirstPlayer};
use tictactoe_engine::Mark;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "human_mark = \"X\"\nfirst_player = \"computer\"\nreplay = false"
    )
    .unwrap();

    let config = ConsoleConfig::load(file.path()).expect("Valid config");
    assert_eq!(config.human_mark(), &Some(Mark::X));
    assert_eq!(config.first_player(), &FirstPlayer::Computer);
    assert!(!*config.replay());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"nobody\"").unwrap();

    let err = ConsoleConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
