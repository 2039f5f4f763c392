//! Draw detection.

use super::win::winner;
use crate::{Board, Cell};

/// Checks if the board is full (no empty cell left).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Cell::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
