//! Board positions, numbered 1-9 row-major.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// Positions are numbered the way the player sees them:
///
/// ```text
/// 1|2|3
/// -+-+-
/// 4|5|6
/// -+-+-
/// 7|8|9
/// ```
///
/// The enum is closed, so an out-of-range position cannot reach the board.
/// External numbers go through [`Position::from_number`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions, in increasing number order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to the player-facing number (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the player-facing number (1-9).
    ///
    /// Anything outside 1-9 is `None`.
    #[instrument(level = "trace")]
    pub fn from_number(number: i64) -> Option<Self> {
        if (1..=9).contains(&number) {
            Self::from_index((number - 1) as usize)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_are_row_major() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::BottomRight.number(), 9);
        assert_eq!(Position::MiddleLeft.index(), 3);
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        assert_eq!(Position::from_number(0), None);
        assert_eq!(Position::from_number(10), None);
        assert_eq!(Position::from_number(-3), None);
        assert_eq!(Position::from_number(7), Some(Position::BottomLeft));
    }

    #[test]
    fn test_iteration_matches_all() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }
}
