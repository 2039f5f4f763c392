//! Traits for the engine's input and presentation collaborators.

use crate::{Board, GameError, GameOutcome, Move, Position};

/// Source of human moves.
///
/// Implementations own their own retry loop for bad input (non-numeric,
/// out of range, occupied) and must only ever return a playable position.
/// Returning an occupied position is a contract violation that stops the
/// game.
pub trait HumanInput {
    /// Asks for the next human move on `board`.
    fn request_move(&mut self, board: &Board) -> Result<Position, GameError>;
}

/// Receives every state change of a game.
///
/// All methods default to doing nothing.
pub trait Presenter {
    /// Called once before the first move.
    fn game_started(&mut self, _board: &Board) -> Result<(), GameError> {
        Ok(())
    }

    /// Called after each move is applied.
    fn move_made(&mut self, _mv: Move, _board: &Board) -> Result<(), GameError> {
        Ok(())
    }

    /// Called once the game reaches a terminal outcome.
    fn game_over(&mut self, _outcome: GameOutcome, _board: &Board) -> Result<(), GameError> {
        Ok(())
    }
}

impl<T: HumanInput + ?Sized> HumanInput for &mut T {
    fn request_move(&mut self, board: &Board) -> Result<Position, GameError> {
        (**self).request_move(board)
    }
}

impl<T: Presenter + ?Sized> Presenter for &mut T {
    fn game_started(&mut self, board: &Board) -> Result<(), GameError> {
        (**self).game_started(board)
    }

    fn move_made(&mut self, mv: Move, board: &Board) -> Result<(), GameError> {
        (**self).move_made(mv, board)
    }

    fn game_over(&mut self, outcome: GameOutcome, board: &Board) -> Result<(), GameError> {
        (**self).game_over(outcome, board)
    }
}

/// Presenter that ignores everything.
impl Presenter for () {}
