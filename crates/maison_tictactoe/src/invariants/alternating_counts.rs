//! Alternating counts invariant: marker counts never drift apart.

use super::Invariant;
use crate::{Board, Marker};

/// Invariant: turns alternate.
///
/// Whichever side moved first, the two marker counts differ by at most one.
pub struct AlternatingCounts;

impl Invariant<Board> for AlternatingCounts {
    fn holds(board: &Board) -> bool {
        board
            .count(Marker::Human)
            .abs_diff(board.count(Marker::Computer))
            <= 1
    }

    fn description() -> &'static str {
        "Turns alternate (marker counts differ by at most one)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut board = Board::new();
        assert!(AlternatingCounts::holds(&board));
        board.place(Position::Center, Marker::Human).unwrap();
        assert!(AlternatingCounts::holds(&board));
        board.place(Position::TopLeft, Marker::Computer).unwrap();
        assert!(AlternatingCounts::holds(&board));
    }

    #[test]
    fn test_computer_first_holds() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Marker::Computer).unwrap();
        assert!(AlternatingCounts::holds(&board));
    }

    #[test]
    fn test_same_side_twice_violates() {
        let mut board = Board::new();
        board.place(Position::Center, Marker::Human).unwrap();
        board.place(Position::TopLeft, Marker::Human).unwrap();
        assert!(!AlternatingCounts::holds(&board));
    }
}
