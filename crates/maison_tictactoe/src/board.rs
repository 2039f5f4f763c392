//! The 3x3 board.

use crate::rules;
use crate::{Cell, GameOutcome, Marker, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major and indexed by [`Position::index`]. A cell
/// only ever goes from empty to occupied through [`Board::place`]; the
/// search's hypothetical moves are the one exception and are always rolled
/// back before the search returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from explicit cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// True if the position is still empty.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Empty positions, in increasing number order.
    pub fn playable(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_playable(pos))
    }

    /// Places a marker on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] and leaves the board untouched if
    /// the cell is already taken.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), MoveError> {
        if !self.is_playable(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.mark(pos, marker);
        Ok(())
    }

    /// Unchecked placement for the search. The cell must be empty.
    pub(crate) fn mark(&mut self, pos: Position, marker: Marker) {
        debug_assert!(self.is_playable(pos), "mark on occupied {:?}", pos);
        self.cells[pos.index()] = Cell::Occupied(marker);
    }

    /// Rolls back a hypothetical move. The cell must be occupied.
    pub(crate) fn unmark(&mut self, pos: Position) {
        debug_assert!(!self.is_playable(pos), "unmark on empty {:?}", pos);
        self.cells[pos.index()] = Cell::Empty;
    }

    /// True if `marker` holds a complete win line.
    pub fn is_win_for(&self, marker: Marker) -> bool {
        rules::is_win_for(self, marker)
    }

    /// The side holding a complete win line, if any.
    pub fn winner(&self) -> Option<Marker> {
        rules::winner(self)
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied(marker))
            .count()
    }

    /// Derives the outcome: human win, computer win, draw, else in progress.
    pub fn outcome(&self) -> GameOutcome {
        if self.is_win_for(Marker::Human) {
            GameOutcome::HumanWin
        } else if self.is_win_for(Marker::Computer) {
            GameOutcome::ComputerWin
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}
