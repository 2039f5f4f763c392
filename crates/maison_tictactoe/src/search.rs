//! Exhaustive minimax search for the computer.
//!
//! The search walks one mutable board in place: every candidate is marked,
//! scored recursively and unmarked again before the next sibling is tried.
//! There is no pruning and no memoisation. The full tree from an empty
//! board is under 9! nodes, so exhaustive search is fast enough and the
//! result is exact.
//!
//! Candidates are always tried in position order 1 to 9 and only a
//! strictly better score replaces the running best, so among equally good
//! moves the lowest-numbered one is chosen.

use crate::{Board, Marker, MoveError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a position, from the computer's point of view.
pub type Score = i8;

/// The computer has won.
pub const COMPUTER_WIN: Score = 1;
/// The human has won.
pub const HUMAN_WIN: Score = -1;
/// Full board, no winner.
pub const DRAW: Score = 0;

/// A top-level candidate and its score under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Where the computer would play.
    pub position: Position,
    /// Value of the game after playing there.
    pub score: Score,
}

/// Minimax searcher.
///
/// Holds a node counter for the most recent top-level search.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the last call to [`Minimax::evaluate`] or
    /// [`Minimax::choose_move`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` under optimal play by both sides.
    ///
    /// `maximizing` is true when the computer is to move. Returns
    /// [`COMPUTER_WIN`], [`HUMAN_WIN`] or [`DRAW`]. The board is left
    /// exactly as it was passed in.
    pub fn score(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if board.is_win_for(Marker::Computer) {
            return COMPUTER_WIN;
        }
        if board.is_win_for(Marker::Human) {
            return HUMAN_WIN;
        }
        if board.is_full() {
            return DRAW;
        }

        let (marker, mut best) = if maximizing {
            (Marker::Computer, Score::MIN)
        } else {
            (Marker::Human, Score::MAX)
        };

        for pos in Position::ALL {
            if !board.is_playable(pos) {
                continue;
            }

            board.mark(pos, marker);
            let score = self.score(board, !maximizing);
            board.unmark(pos);

            if maximizing {
                best = best.max(score);
            } else {
                best = best.min(score);
            }
        }

        best
    }

    /// Scores every playable position for the computer, in order 1 to 9.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the board is already decided and
    /// [`MoveError::NoPlayablePosition`] if it is full.
    #[instrument(level = "debug", skip(self, board))]
    pub fn evaluate(&mut self, board: &mut Board) -> Result<Vec<MoveScore>, MoveError> {
        if board.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if board.is_full() {
            return Err(MoveError::NoPlayablePosition);
        }

        self.nodes = 0;
        let mut scores = Vec::with_capacity(9);

        for pos in Position::ALL {
            if !board.is_playable(pos) {
                continue;
            }

            #[cfg(debug_assertions)]
            let snapshot = board.clone();

            board.mark(pos, Marker::Computer);
            let score = self.score(board, false);
            board.unmark(pos);

            #[cfg(debug_assertions)]
            debug_assert_eq!(*board, snapshot, "rollback after {:?}", pos);

            scores.push(MoveScore {
                position: pos,
                score,
            });
        }

        debug!(candidates = scores.len(), nodes = self.nodes, "Evaluated candidates");
        Ok(scores)
    }

    /// Picks the computer's move: the first position with the highest score.
    ///
    /// # Errors
    ///
    /// Same as [`Minimax::evaluate`].
    #[instrument(level = "debug", skip(self, board))]
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Position, MoveError> {
        let scores = self.evaluate(board)?;
        let best = best_move(&scores).ok_or(MoveError::NoPlayablePosition)?;
        debug!(
            position = best.position.number(),
            score = best.score,
            nodes = self.nodes,
            "Computer chose move"
        );
        Ok(best.position)
    }
}

/// The first candidate with the strictly greatest score.
///
/// Later candidates only win with a higher score, so ties go to the
/// lowest position in evaluation order.
pub fn best_move(scores: &[MoveScore]) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for &candidate in scores {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Scores `board` with a fresh searcher. See [`Minimax::score`].
pub fn minimax(board: &mut Board, maximizing: bool) -> Score {
    Minimax::new().score(board, maximizing)
}

/// Picks the computer's move with a fresh searcher. See [`Minimax::choose_move`].
pub fn choose_move(board: &mut Board) -> Result<Position, MoveError> {
    Minimax::new().choose_move(board)
}
