//! JSON analysis of arbitrary positions.

use maison::{analyze, parse_board};
use maison_tictactoe::GameOutcome;
use serde_json::{Value, json};

fn analysis_json(cells: &str) -> Value {
    let board = parse_board(cells).unwrap();
    serde_json::to_value(analyze(&board)).unwrap()
}

#[test]
fn test_empty_board_prefers_first_square() {
    let value = analysis_json(".........");
    assert_eq!(value["outcome"], serde_json::to_value(GameOutcome::InProgress).unwrap());
    assert_eq!(value["best_move"], json!(1));

    let candidates = value["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 9);
    assert!(candidates.iter().all(|c| c["score"] == json!(0)));
    assert!(value["nodes"].as_u64().unwrap() > 0);
}

#[test]
fn test_winning_reply_scores_one() {
    // o o . / x x . / x . .
    let value = analysis_json("oo.xx.x..");
    assert_eq!(value["best_move"], json!(3));
    let winning = value["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["position"] == json!(3))
        .unwrap();
    assert_eq!(winning["score"], json!(1));
}

#[test]
fn test_decided_board_has_no_move() {
    let value = analysis_json("xxxoo....");
    assert_eq!(value["outcome"], serde_json::to_value(GameOutcome::HumanWin).unwrap());
    assert_eq!(value["best_move"], Value::Null);
    assert_eq!(value["candidates"], json!([]));
}
