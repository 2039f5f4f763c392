//! Error types for the game core.

use crate::Position;

/// A move request that breaks the board or engine contract.
///
/// These are programming errors in the caller (the orchestrating loop or
/// the input collaborator), never a normal retry path.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// No empty cell is left to search.
    #[display("No playable position left")]
    NoPlayablePosition,

    /// An invariant was violated after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that stops a running game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move broke the board or engine contract.
    #[display("{}", _0)]
    Move(MoveError),

    /// The input collaborator could not supply a move.
    #[display("Input error: {}", _0)]
    Input(String),

    /// The presentation collaborator failed.
    #[display("Presentation error: {}", _0)]
    Presentation(String),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::Input(_) | GameError::Presentation(_) => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}
