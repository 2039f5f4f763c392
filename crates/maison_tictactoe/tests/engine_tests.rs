//! Tests for the turn loop.

use maison_tictactoe::{
    Board, EngineState, GameEngine, GameError, GameOutcome, HumanInput, Marker, Move,
    MoveError, Position, Presenter,
};
use std::collections::VecDeque;

/// Human that plays the first empty square.
#[derive(Debug, Default)]
struct FirstFree {
    calls: usize,
}

impl HumanInput for FirstFree {
    fn request_move(&mut self, board: &Board) -> Result<Position, GameError> {
        self.calls += 1;
        board
            .playable()
            .next()
            .ok_or_else(|| GameError::Input("no empty square".to_string()))
    }
}

/// Human that replays a fixed script, whatever the board says.
#[derive(Debug)]
struct Scripted {
    moves: VecDeque<Position>,
}

impl Scripted {
    fn new(moves: &[Position]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl HumanInput for Scripted {
    fn request_move(&mut self, _board: &Board) -> Result<Position, GameError> {
        self.moves
            .pop_front()
            .ok_or_else(|| GameError::Input("script exhausted".to_string()))
    }
}

#[derive(Debug, Default)]
struct Recorder {
    started: usize,
    moves: Vec<Move>,
    outcomes: Vec<GameOutcome>,
}

impl Presenter for Recorder {
    fn game_started(&mut self, _board: &Board) -> Result<(), GameError> {
        self.started += 1;
        Ok(())
    }

    fn move_made(&mut self, mv: Move, _board: &Board) -> Result<(), GameError> {
        self.moves.push(mv);
        Ok(())
    }

    fn game_over(&mut self, outcome: GameOutcome, _board: &Board) -> Result<(), GameError> {
        self.outcomes.push(outcome);
        Ok(())
    }
}

#[test]
fn test_new_engine_waits_for_human() {
    let engine = GameEngine::new(FirstFree::default(), ());
    assert_eq!(engine.state(), EngineState::InProgress(Marker::Human));
    assert_eq!(engine.board(), &Board::new());
    assert!(engine.history().is_empty());
}

#[test]
fn test_first_free_human_loses() {
    let mut engine = GameEngine::new(FirstFree::default(), Recorder::default());
    let outcome = engine.run().unwrap();

    assert_eq!(outcome, GameOutcome::ComputerWin);
    assert_eq!(engine.state(), EngineState::Terminated(GameOutcome::ComputerWin));

    let played: Vec<(Marker, u8)> = engine
        .history()
        .iter()
        .map(|mv| (mv.marker, mv.position.number()))
        .collect();
    assert_eq!(
        played,
        vec![
            (Marker::Human, 1),
            (Marker::Computer, 5),
            (Marker::Human, 2),
            (Marker::Computer, 3),
            (Marker::Human, 4),
            (Marker::Computer, 7),
        ]
    );

    assert_eq!(engine.input().calls, 3);
    let recorder = engine.presenter();
    assert_eq!(recorder.started, 1);
    assert_eq!(recorder.moves, engine.history());
    assert_eq!(recorder.outcomes, vec![GameOutcome::ComputerWin]);
}

#[test]
fn test_turns_alternate_step_by_step() {
    let mut engine = GameEngine::new(Scripted::new(&[Position::Center]), ());

    assert_eq!(engine.step(), Ok(EngineState::InProgress(Marker::Computer)));
    assert_eq!(engine.step(), Ok(EngineState::InProgress(Marker::Human)));
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history()[0], Move::new(Marker::Human, Position::Center));
    assert_eq!(engine.history()[1].marker, Marker::Computer);
}

#[test]
fn test_decided_board_terminates_without_search() {
    // Human on the 1-5-9 diagonal, every other square empty.
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        board.place(pos, Marker::Human).unwrap();
    }
    assert_eq!(board.outcome(), GameOutcome::HumanWin);

    let mut engine = GameEngine::from_board(
        board,
        Marker::Computer,
        FirstFree::default(),
        Recorder::default(),
    );
    assert_eq!(engine.state(), EngineState::Terminated(GameOutcome::HumanWin));

    assert_eq!(engine.run(), Ok(GameOutcome::HumanWin));
    assert_eq!(engine.searcher().nodes(), 0);
    assert_eq!(engine.input().calls, 0);
    assert!(engine.history().is_empty());
    assert_eq!(engine.presenter().outcomes, vec![GameOutcome::HumanWin]);
}

#[test]
fn test_step_after_game_over_is_rejected() {
    let mut engine = GameEngine::new(FirstFree::default(), ());
    engine.run().unwrap();
    assert_eq!(engine.step(), Err(GameError::Move(MoveError::GameOver)));
}

#[test]
fn test_occupied_human_move_is_contract_violation() {
    let mut engine = GameEngine::new(Scripted::new(&[Position::Center, Position::Center]), ());
    engine.step().unwrap();
    engine.step().unwrap();
    let before = engine.board().clone();

    assert_eq!(
        engine.step(),
        Err(GameError::Move(MoveError::Occupied(Position::Center)))
    );
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.state(), EngineState::InProgress(Marker::Human));
}

#[test]
fn test_input_failure_stops_run() {
    let mut engine = GameEngine::new(Scripted::new(&[]), Recorder::default());
    assert_eq!(
        engine.run(),
        Err(GameError::Input("script exhausted".to_string()))
    );
    assert!(engine.presenter().outcomes.is_empty());
}

#[test]
fn test_computer_first_opens_top_left() {
    let mut engine =
        GameEngine::from_board(Board::new(), Marker::Computer, FirstFree::default(), ());
    assert_eq!(engine.step(), Ok(EngineState::InProgress(Marker::Human)));
    assert_eq!(
        engine.history(),
        &[Move::new(Marker::Computer, Position::TopLeft)]
    );
}

#[test]
fn test_collaborators_by_reference() {
    let mut input = FirstFree::default();
    let mut recorder = Recorder::default();
    {
        let mut engine = GameEngine::new(&mut input, &mut recorder);
        engine.run().unwrap();
    }
    assert_eq!(input.calls, 3);
    assert_eq!(recorder.outcomes.len(), 1);
}

/// Presenter whose first `move_made` fails.
#[derive(Debug, Default)]
struct FailsOnce {
    failed: bool,
}

impl Presenter for FailsOnce {
    fn move_made(&mut self, _mv: Move, _board: &Board) -> Result<(), GameError> {
        if self.failed {
            Ok(())
        } else {
            self.failed = true;
            Err(GameError::Presentation("display lost".to_string()))
        }
    }
}

#[test]
fn test_presenter_failure_still_passes_the_turn() {
    let mut engine = GameEngine::new(
        Scripted::new(&[Position::Center, Position::TopLeft]),
        FailsOnce::default(),
    );

    assert_eq!(
        engine.step(),
        Err(GameError::Presentation("display lost".to_string()))
    );
    assert_eq!(engine.state(), EngineState::InProgress(Marker::Computer));
    assert_eq!(engine.history().len(), 1);

    assert_eq!(engine.step(), Ok(EngineState::InProgress(Marker::Human)));
    assert_eq!(engine.board().count(Marker::Human), 1);
    assert_eq!(engine.board().count(Marker::Computer), 1);
}

#[test]
fn test_step_on_decided_board_announces_outcome() {
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        board.place(pos, Marker::Computer).unwrap();
    }
    for pos in [Position::Center, Position::BottomLeft] {
        board.place(pos, Marker::Human).unwrap();
    }

    let mut engine = GameEngine::from_board(
        board,
        Marker::Human,
        FirstFree::default(),
        Recorder::default(),
    );

    assert_eq!(engine.step(), Err(GameError::Move(MoveError::GameOver)));
    assert_eq!(engine.step(), Err(GameError::Move(MoveError::GameOver)));
    assert_eq!(engine.input().calls, 0);
    assert_eq!(engine.presenter().started, 1);
    assert_eq!(engine.presenter().outcomes, vec![GameOutcome::ComputerWin]);
}
