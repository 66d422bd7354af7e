//! Tests for headless replay output.

use timetoe::{ReplayError, ReplayPlan, ReplaySummary, replay};
use timetoe_rules::{Dimension, HistoryError};

#[test]
fn test_json_summary_for_win() {
    let plan = ReplayPlan {
        moves: vec![0, 4, 1, 3, 2],
        ..ReplayPlan::default()
    };
    let game = replay(Dimension::CLASSIC, &plan).expect("Valid replay");
    let json = serde_json::to_value(ReplaySummary::from_game(&game)).unwrap();

    assert_eq!(json["size"], 3);
    assert_eq!(json["current_move"], 5);
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["outcome"]["state"], "won");
    assert_eq!(json["outcome"]["line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["board"], serde_json::json!(["XXX", "OO.", "..."]));
}

#[test]
fn test_jump_out_of_range() {
    let plan = ReplayPlan {
        moves: vec![0],
        jump: Some(4),
        then: vec![],
    };
    assert_eq!(
        replay(Dimension::CLASSIC, &plan).unwrap_err(),
        ReplayError::Jump(HistoryError::MoveOutOfRange {
            requested: 4,
            len: 2
        })
    );
}

#[test]
fn test_view_after_jump_without_branch() {
    let plan = ReplayPlan {
        moves: vec![12, 0, 6],
        jump: Some(1),
        then: vec![],
    };
    let game = replay(Dimension::new(5).unwrap(), &plan).unwrap();
    let summary = ReplaySummary::from_game(&game);
    assert_eq!(summary.snapshots, 4);
    assert_eq!(summary.status, "Next player: O");
    assert_eq!(summary.timeline[1], "You are here at move #1");
}
