//! Maison du Tic Tac Toe - terminal front end.
//!
//! Wires the [`maison_tictactoe`] engine to a terminal:
//!
//! - **console**: keyboard input with a re-prompt loop, and a presenter
//!   with optional typewriter pacing
//! - **config**: TOML console configuration
//! - **render**: plain-text board and legend
//! - **analyze**: JSON evaluation of an arbitrary position
//! - **cli**: command-line parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod console;
pub mod render;

pub use analyze::{Analysis, CandidateReport, ParseBoardError, analyze, parse_board};
pub use cli::{Cli, Command, DEFAULT_CONFIG};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{ConsoleInput, ConsolePresenter};
pub use render::Symbols;
