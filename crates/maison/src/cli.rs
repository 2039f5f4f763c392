//! Command-line interface for maison.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the console configuration file.
pub const DEFAULT_CONFIG: &str = "maison.toml";

/// Maison du Tic Tac Toe - play against an opponent that cannot lose
#[derive(Parser, Debug)]
#[command(name = "maison")]
#[command(about = "Tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play one game in the terminal
    Play {
        /// Path to the console config file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Override the per-character typing delay
        #[arg(long)]
        type_delay_ms: Option<u64>,

        /// Override the pause before the computer's move is shown
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Print the position legend
    Legend,

    /// Print the computer's evaluation of a position as JSON
    Analyze {
        /// Nine cells, row-major: x = human, o = computer, . = empty
        #[arg(long)]
        board: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from(DEFAULT_CONFIG),
            type_delay_ms: None,
            think_delay_ms: None,
        }
    }
}
