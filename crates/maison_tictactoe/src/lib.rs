//! Tic-tac-toe against an opponent that never loses.
//!
//! The crate is the pure game core: a fixed 3x3 [`Board`], the static
//! win-line [`rules`], an exhaustive [`Minimax`] search for the computer
//! and a [`GameEngine`] that alternates turns until exactly one
//! [`GameOutcome`] is reached.
//!
//! Nothing here performs I/O. The engine talks to the outside world through
//! two collaborator traits: [`HumanInput`] supplies already-validated human
//! moves and [`Presenter`] is told about every state change.
//!
//! # Example
//!
//! ```
//! use maison_tictactoe::{Board, Marker, Position, choose_move};
//!
//! let mut board = Board::new();
//! board.place(Position::Center, Marker::Human)?;
//! let reply = choose_move(&mut board)?;
//! assert!(board.is_playable(reply));
//! # Ok::<(), maison_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod collaborators;
mod engine;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::Board;
pub use collaborators::{HumanInput, Presenter};
pub use engine::{EngineState, GameEngine, Move};
pub use error::{GameError, MoveError};
pub use invariants::{
    AlternatingCounts, ExclusiveWinner, Invariant, InvariantSet, InvariantViolation,
    TicTacToeInvariants,
};
pub use outcome::GameOutcome;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine};
pub use search::{
    COMPUTER_WIN, DRAW, HUMAN_WIN, Minimax, MoveScore, Score, best_move, choose_move, minimax,
};
pub use types::{Cell, Marker};
