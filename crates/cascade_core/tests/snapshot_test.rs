//! Tests for boards arriving as JSON snapshots.

use cascade_core::{
    Board, BoardError, BoardSnapshot, Difficulty, Player, Position, Starter, decide_move,
};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

#[test]
fn test_snapshot_from_json() {
    let snapshot: BoardSnapshot = serde_json::from_str(
        r#"{ " ": ["1", "2", "3"], "A": ["X", "X", ""], "B": ["O", "", ""], "C": ["", "O", ""] }"#,
    )
    .expect("valid json");
    let board = snapshot.to_board().expect("valid board");
    assert!(board.is_held_by(Position::TopLeft, Player::Agent));
    assert!(board.is_held_by(Position::MiddleLeft, Player::Agent));
    assert!(board.is_held_by(Position::TopCenter, Player::Opponent));
    assert!(board.is_held_by(Position::MiddleRight, Player::Opponent));
}

#[test]
fn test_snapshot_decision_round_trip() {
    let snapshot: BoardSnapshot =
        serde_json::from_str(r#"{ "A": ["X", "X", ""], "B": ["O", "", ""], "C": ["", "O", ""] }"#)
            .expect("valid json");
    let mut board = Board::try_from(&snapshot).expect("valid board");
    let mut rng = StdRng::seed_from_u64(5);
    decide_move(&mut board, 3, Starter::Agent, Difficulty::Hard, &mut rng).expect("move");

    let json = serde_json::to_value(BoardSnapshot::from(&board)).expect("serializable");
    assert_eq!(json["A"], serde_json::json!(["X", "X", "X"]));
}

#[test]
fn test_foreign_symbol_is_invalid_board_state() {
    let snapshot: BoardSnapshot =
        serde_json::from_str(r#"{ "A": ["X", "", ""], "B": ["", "?", ""], "C": ["", "", ""] }"#)
            .expect("valid json");
    let err = snapshot.to_board().unwrap_err();
    assert_eq!(
        err,
        BoardError::ForeignSymbol {
            column: 'B',
            row: 1,
            symbol: "?".to_string()
        }
    );
    assert!(err.to_string().contains("foreign symbol"));
}

#[test]
fn test_short_column_rejected() {
    let snapshot: BoardSnapshot =
        serde_json::from_str(r#"{ "A": ["X", ""], "B": ["", "", ""], "C": ["", "", ""] }"#)
            .expect("valid json");
    assert_eq!(
        snapshot.to_board(),
        Err(BoardError::WrongShape { column: 'A', len: 2 })
    );
}
