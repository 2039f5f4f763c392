//! Markers and cells.

use serde::{Deserialize, Serialize};

/// One of the two sides. The human always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The human player.
    Human,
    /// The computer opponent (the maximizing side).
    Computer,
}

impl Marker {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Human => Marker::Computer,
            Marker::Computer => Marker::Human,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Human => write!(f, "human"),
            Marker::Computer => write!(f, "computer"),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a side.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Occupied(marker)
    }
}
