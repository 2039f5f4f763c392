//! Turn loop for a single game.
//!
//! The engine alternates between the human (moves come from a
//! [`HumanInput`]) and the computer (moves come from [`Minimax`]), applies
//! each move to the board and re-derives the outcome after every move.
//! It stops at exactly one terminal outcome.

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::{
    Board, GameError, GameOutcome, HumanInput, Marker, Minimax, MoveError, Position, Presenter,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move: a side placing its marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side moving.
    pub marker: Marker,
    /// Where the marker was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(marker: Marker, position: Position) -> Self {
        Self { marker, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.number())
    }
}

/// State of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Waiting for the given side to move.
    InProgress(Marker),
    /// The game is over. Never holds [`GameOutcome::InProgress`].
    Terminated(GameOutcome),
}

/// Plays one game between a human collaborator and the minimax opponent.
#[derive(Debug)]
pub struct GameEngine<I, P> {
    board: Board,
    state: EngineState,
    history: Vec<Move>,
    searcher: Minimax,
    input: I,
    presenter: P,
    started: bool,
    announced: bool,
}

impl<I, P> GameEngine<I, P>
where
    I: HumanInput,
    P: Presenter,
{
    /// Starts a game on an empty board with the human to move.
    #[instrument(skip_all)]
    pub fn new(input: I, presenter: P) -> Self {
        Self::from_board(Board::new(), Marker::Human, input, presenter)
    }

    /// Resumes a game from `board` with `to_move` next.
    ///
    /// The board should be reachable through alternating play. If it is
    /// already decided the engine starts terminated and never searches.
    #[instrument(skip(board, input, presenter))]
    pub fn from_board(board: Board, to_move: Marker, input: I, presenter: P) -> Self {
        let outcome = board.outcome();
        let state = if outcome.is_terminal() {
            EngineState::Terminated(outcome)
        } else {
            EngineState::InProgress(to_move)
        };
        debug!(?state, "Engine created");

        Self {
            board,
            state,
            history: Vec::new(),
            searcher: Minimax::new(),
            input,
            presenter,
            started: false,
            announced: false,
        }
    }

    /// Current state of the turn loop.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied by this engine, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The computer's searcher (node count of its last search).
    pub fn searcher(&self) -> &Minimax {
        &self.searcher
    }

    /// The input collaborator.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// The presentation collaborator.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the engine, handing back its collaborators.
    pub fn into_parts(self) -> (I, P) {
        (self.input, self.presenter)
    }

    /// Plays exactly one move for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once terminated; the outcome is announced
    /// first if nobody has heard it yet. A human move on an occupied cell
    /// is [`MoveError::Occupied`] and leaves the board untouched.
    /// Collaborator failures are passed through. A presenter failure after
    /// a move still leaves the turn with the other side.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn step(&mut self) -> Result<EngineState, GameError> {
        self.start()?;
        let marker = match self.state {
            EngineState::Terminated(outcome) => {
                self.finish(outcome)?;
                return Err(MoveError::GameOver.into());
            }
            EngineState::InProgress(marker) => marker,
        };

        let position = match marker {
            Marker::Human => self.input.request_move(&self.board)?,
            Marker::Computer => self.searcher.choose_move(&mut self.board)?,
        };

        self.board.place(position, marker)?;
        let mv = Move::new(marker, position);
        self.history.push(mv);
        info!(%mv, "Move applied");

        let outcome = self.board.outcome();
        self.state = if outcome.is_terminal() {
            EngineState::Terminated(outcome)
        } else {
            EngineState::InProgress(marker.opponent())
        };

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        self.presenter.move_made(mv, &self.board)?;
        if let EngineState::Terminated(outcome) = self.state {
            self.finish(outcome)?;
        }

        Ok(self.state)
    }

    /// Plays until the game is decided and returns the outcome.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        self.start()?;

        loop {
            match self.state {
                EngineState::InProgress(_) => {
                    self.step()?;
                }
                EngineState::Terminated(outcome) => {
                    self.finish(outcome)?;
                    return Ok(outcome);
                }
            }
        }
    }

    fn start(&mut self) -> Result<(), GameError> {
        if !self.started {
            self.started = true;
            self.presenter.game_started(&self.board)?;
        }
        Ok(())
    }

    fn finish(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        if !self.announced {
            self.announced = true;
            info!(%outcome, moves = self.history.len(), "Game over");
            self.presenter.game_over(outcome, &self.board)?;
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(&self.board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
