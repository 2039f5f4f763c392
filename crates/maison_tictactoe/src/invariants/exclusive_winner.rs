//! Exclusive winner invariant: at most one side holds a win line.

use super::Invariant;
use crate::{Board, Marker};

/// Invariant: never both sides winning at once.
pub struct ExclusiveWinner;

impl Invariant<Board> for ExclusiveWinner {
    fn holds(board: &Board) -> bool {
        !(board.is_win_for(Marker::Human) && board.is_win_for(Marker::Computer))
    }

    fn description() -> &'static str {
        "At most one side holds a complete win line"
    }
}
