//! Console configuration.

use crate::render::Symbols;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the console game looks and paces itself.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ConsoleConfig {
    /// Symbol drawn for the human's marker.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Symbol drawn for the computer's marker.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Symbol drawn for an empty cell.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Delay between characters of the computer's lines (0 prints at once).
    #[serde(default)]
    type_delay_ms: u64,

    /// Pause before the computer's move is shown.
    #[serde(default)]
    think_delay_ms: u64,

    /// Lines the computer cycles through after each of its moves.
    #[serde(default = "default_quips")]
    quips: Vec<String>,
}

fn default_human_symbol() -> char {
    'x'
}

fn default_computer_symbol() -> char {
    'o'
}

fn default_empty_symbol() -> char {
    ' '
}

fn default_quips() -> Vec<String> {
    [
        "not bad",
        "how'd you like that?",
        "I can see the future",
        "sorry for the wait, my mum just called",
        "you really think you can win?",
        "you literally can't beat me",
        "Rust's awesome",
        "nearly there",
        "you feeling lucky?",
        "I can't lose btw",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            empty_symbol: default_empty_symbol(),
            type_delay_ms: 0,
            think_delay_ms: 0,
            quips: default_quips(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Board symbols described by this configuration.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            human: self.human_symbol,
            computer: self.computer_symbol,
            empty: self.empty_symbol,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [self.human_symbol, self.computer_symbol, self.empty_symbol];
        if symbols[0] == symbols[1] || symbols[0] == symbols[2] || symbols[1] == symbols[2] {
            return Err(ConfigError::new(format!(
                "Board symbols must differ, got {:?}",
                symbols
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
