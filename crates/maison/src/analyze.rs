//! One-shot analysis of a position, for the `analyze` command.

use maison_tictactoe::{
    AlternatingCounts, Board, Cell, GameOutcome, Invariant, Marker, Minimax, Score, best_move,
};
use serde::Serialize;
use tracing::{instrument, warn};

/// A board description that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The description does not have exactly 9 cells.
    #[display("Expected 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A character is not a known cell symbol.
    #[display("Unknown cell {:?} at position {}", symbol, number)]
    UnknownCell {
        /// The offending character.
        symbol: char,
        /// Position number (1-9) where it appeared.
        number: usize,
    },
}

impl std::error::Error for ParseBoardError {}

/// Parses 9 row-major cells.
///
/// `x`/`X` is the human, `o`/`O` the computer, and `.`, `-`, `_`, a space
/// or a digit marks an empty cell.
#[instrument]
pub fn parse_board(cells: &str) -> Result<Board, ParseBoardError> {
    let symbols: Vec<char> = cells.chars().collect();
    if symbols.len() != 9 {
        return Err(ParseBoardError::WrongLength(symbols.len()));
    }

    let mut parsed = [Cell::Empty; 9];
    for (i, &symbol) in symbols.iter().enumerate() {
        parsed[i] = match symbol {
            'x' | 'X' => Cell::Occupied(Marker::Human),
            'o' | 'O' => Cell::Occupied(Marker::Computer),
            '.' | '-' | '_' | ' ' => Cell::Empty,
            c if c.is_ascii_digit() => Cell::Empty,
            _ => {
                return Err(ParseBoardError::UnknownCell {
                    symbol,
                    number: i + 1,
                });
            }
        };
    }

    Ok(Board::from_cells(parsed))
}

/// Score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateReport {
    /// Position number (1-9).
    pub position: u8,
    /// Minimax score: 1 computer wins, 0 draw, -1 human wins.
    pub score: Score,
}

/// Result of analysing a position with the computer to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Outcome of the position as given.
    pub outcome: GameOutcome,
    /// The move the computer would play, if the game is still open.
    pub best_move: Option<u8>,
    /// Every candidate with its score, in position order.
    pub candidates: Vec<CandidateReport>,
    /// Nodes visited by the search.
    pub nodes: u64,
}

/// Analyses `board` with the computer to move.
#[instrument(skip(board))]
pub fn analyze(board: &Board) -> Analysis {
    let outcome = board.outcome();
    if !AlternatingCounts::holds(board) {
        warn!("Marker counts differ by more than one; position is not reachable");
    }

    if outcome.is_terminal() {
        return Analysis {
            outcome,
            best_move: None,
            candidates: Vec::new(),
            nodes: 0,
        };
    }

    let mut searcher = Minimax::new();
    let mut scratch = board.clone();
    let scores = match searcher.evaluate(&mut scratch) {
        Ok(scores) => scores,
        Err(err) => {
            warn!(%err, "Search refused position");
            Vec::new()
        }
    };

    let best = best_move(&scores).map(|s| s.position.number());
    let candidates = scores
        .iter()
        .map(|s| CandidateReport {
            position: s.position.number(),
            score: s.score,
        })
        .collect();

    Analysis {
        outcome,
        best_move: best,
        candidates,
        nodes: searcher.nodes(),
    }
}
