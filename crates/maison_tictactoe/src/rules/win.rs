//! Win detection.

use crate::{Board, Cell, Marker, Position};

/// Three positions that win when uniformly occupied by one marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The positions making up this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if every position on the line holds `marker`.
    pub fn is_complete_for(&self, board: &Board, marker: Marker) -> bool {
        self.0.iter().all(|&pos| board.get(pos) == Cell::Occupied(marker))
    }
}

/// The 8 win lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns true if `marker` has completed any win line.
pub fn is_win_for(board: &Board, marker: Marker) -> bool {
    WIN_LINES.iter().any(|line| line.is_complete_for(board, marker))
}

/// Returns the side holding a complete win line, if any.
///
/// The human is checked first. Both can only win at once on a board
/// that was not reached through legal play.
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::Human, Marker::Computer]
        .into_iter()
        .find(|&marker| is_win_for(board, marker))
}
