//! Game outcome, derived from the board on demand.

use serde::{Deserialize, Serialize};

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won and there are empty cells left.
    InProgress,
    /// The human completed a win line.
    HumanWin,
    /// The computer completed a win line.
    ComputerWin,
    /// The board is full with no win line complete.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game can no longer continue.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::HumanWin => write!(f, "Human wins"),
            GameOutcome::ComputerWin => write!(f, "Computer wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
