//! Tests for loading match configuration files.

use genius_tictactoe::{MatchConfig, PlayerKind};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_full_config() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        "x = \"human\"\no = \"random\"\ngames = 12\nmove_delay_ms = 0\nseed = 77"
    )
    .unwrap();

    let config = MatchConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.x(), PlayerKind::Human);
    assert_eq!(*config.o(), PlayerKind::Random);
    assert_eq!(*config.games(), 12);
    assert_eq!(config.move_delay(), Duration::ZERO);
    assert_eq!(*config.seed(), Some(77));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = MatchConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, MatchConfig::default());
}

#[test]
fn test_unknown_player_kind_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "x = \"oracle\"").unwrap();

    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_unreadable_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
