//! Plain-text board rendering.

use maison_tictactoe::{Board, Cell, Marker, Position};

/// Characters drawn for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// The human's marker.
    pub human: char,
    /// The computer's marker.
    pub computer: char,
    /// An empty cell.
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            human: 'x',
            computer: 'o',
            empty: ' ',
        }
    }
}

impl Symbols {
    /// Character for a single cell.
    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(Marker::Human) => self.human,
            Cell::Occupied(Marker::Computer) => self.computer,
        }
    }
}

/// Renders the board contents, one tab-indented row per line.
pub fn board(board: &Board, symbols: &Symbols) -> String {
    grid(|pos| symbols.cell(board.get(pos)))
}

/// Renders the position names 1-9 in board layout.
pub fn legend() -> String {
    grid(|pos| char::from(b'0' + pos.number()))
}

fn grid(mut label: impl FnMut(Position) -> char) -> String {
    Position::ALL
        .chunks(3)
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|&pos| label(pos).to_string()).collect();
            format!("\t\t{}", cells.join("|"))
        })
        .collect::<Vec<_>>()
        .join("\n\t\t-+-+-\n")
}
