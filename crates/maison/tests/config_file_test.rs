//! Loading console configuration from disk.

use maison::ConsoleConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_loads_partial_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type_delay_ms = 25").unwrap();
    writeln!(file, "quips = [\"hmm\"]").unwrap();

    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.type_delay_ms(), 25);
    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(config.quips(), &vec!["hmm".to_string()]);
    assert_eq!(*config.human_symbol(), 'x');
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConsoleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_clashing_symbols_are_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "computer_symbol = 'x'").unwrap();

    let err = ConsoleConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Board symbols must differ"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type_delay_ms = \"soon\"").unwrap();

    let err = ConsoleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
