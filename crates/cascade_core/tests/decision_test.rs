//! Tests for the difficulty dispatcher against whole boards.

use cascade_core::{
    Board, BoardError, Decision, DecisionError, Difficulty, Player, Position, RuleKind, Square,
    Starter, Step, decide_move, expected_marks, has_won, is_draw, is_full, plan, try_block,
    try_finish, winner,
};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

use Player::{Agent as X, Opponent as O};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Every board the agent can be asked to move on: counts fit some round,
/// nobody has won and a cell is free. Yields the board with its round and starter.
fn playable_boards() -> Vec<(Board, u8, Starter)> {
    let positions: Vec<Position> = Position::iter().collect();
    let mut boards = Vec::new();
    for code in 0..3_u32.pow(9) {
        let mut board = Board::new();
        let mut rest = code;
        for &pos in &positions {
            match rest % 3 {
                1 => board.set(pos, Square::Occupied(X)),
                2 => board.set(pos, Square::Occupied(O)),
                _ => {}
            }
            rest /= 3;
        }
        if winner(&board).is_some() || is_full(&board) {
            continue;
        }
        let (xs, os) = (board.count(X), board.count(O));
        let round = u8::try_from(xs + 1).expect("at most nine marks");
        let starter = if os == xs {
            Starter::Agent
        } else if os == xs + 1 {
            Starter::Opponent
        } else {
            continue;
        };
        assert_eq!(expected_marks(round, starter), (xs, os));
        boards.push((board, round, starter));
    }
    boards
}

#[test]
fn test_hard_opening_on_empty_board() {
    let mut board = Board::new();
    let decision = decide_move(&mut board, 1, Starter::Agent, Difficulty::Hard, &mut rng())
        .expect("opening move");
    assert_eq!(decision, Decision::new(Position::TopLeft, RuleKind::Opening));
    assert!(board.is_held_by(Position::TopLeft, X));
}

#[test]
fn test_finisher_completes_column_a() {
    for (difficulty, round) in [(Difficulty::Medium, 3), (Difficulty::Hard, 3)] {
        let mut board = Board::with_marks([
            (Position::TopLeft, X),
            (Position::MiddleLeft, X),
            (Position::TopCenter, O),
            (Position::MiddleRight, O),
        ]);
        let decision = decide_move(&mut board, round, Starter::Agent, difficulty, &mut rng())
            .expect("finishing move");
        assert_eq!(decision.position, Position::BottomLeft);
        assert_eq!(decision.rule, RuleKind::Finish);
        assert!(has_won(&board, X));
    }
}

#[test]
fn test_blocker_takes_a0_against_diagonal() {
    for (difficulty, round, starter) in [
        (Difficulty::Medium, 2, Starter::Opponent),
        (Difficulty::Hard, 2, Starter::Opponent),
    ] {
        let mut board = Board::with_marks([
            (Position::Center, O),
            (Position::BottomRight, O),
            (Position::TopRight, X),
        ]);
        let decision = decide_move(&mut board, round, starter, difficulty, &mut rng())
            .expect("blocking move");
        assert_eq!(decision.position, Position::TopLeft, "{difficulty} round {round}");
        assert_eq!(decision.rule, RuleKind::Block);
    }
}

#[test]
fn test_win_beats_block() {
    // X threatens C2, O threatens A2; the finish wins.
    let mut board = Board::with_marks([
        (Position::TopRight, X),
        (Position::MiddleRight, X),
        (Position::TopLeft, O),
        (Position::MiddleLeft, O),
    ]);
    assert_eq!(try_block(&board), Some(Position::BottomLeft));
    let decision = decide_move(&mut board, 3, Starter::Agent, Difficulty::Hard, &mut rng())
        .expect("move");
    assert_eq!(decision.position, Position::BottomRight);
    assert_eq!(decision.rule, RuleKind::Finish);
    assert!(has_won(&board, X));
}

/// Whether `difficulty` consults `step` in this round.
fn runs(difficulty: Difficulty, round: u8, starter: Starter, step: Step) -> bool {
    plan(difficulty, round, starter).contains(&step)
}

#[test]
fn test_finisher_tiers_always_take_the_win() {
    for (board, round, starter) in playable_boards() {
        let Some(expected) = try_finish(&board) else {
            continue;
        };
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            if !runs(difficulty, round, starter, Step::Finish) {
                continue;
            }
            let mut played = board.clone();
            let decision = decide_move(&mut played, round, starter, difficulty, &mut rng())
                .expect("move available");
            assert_eq!(decision.position, expected);
            assert!(has_won(&played, X));
        }
    }
}

#[test]
fn test_defending_tiers_always_block() {
    for (board, round, starter) in playable_boards() {
        if try_finish(&board).is_some() {
            continue;
        }
        let Some(expected) = try_block(&board) else {
            continue;
        };
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            if !runs(difficulty, round, starter, Step::Block) {
                continue;
            }
            let mut played = board.clone();
            let decision = decide_move(&mut played, round, starter, difficulty, &mut rng())
                .expect("move available");
            assert_eq!(decision.position, expected);
            assert_eq!(decision.rule, RuleKind::Block);
        }
    }
}

#[test]
fn test_every_playable_board_gets_a_move() {
    let boards = playable_boards();
    for round in 1..=5 {
        for starter in [Starter::Agent, Starter::Opponent] {
            // Nine marks before the agent's fifth move: always full.
            if (round, starter) == (5, Starter::Opponent) {
                continue;
            }
            let covered = boards
                .iter()
                .filter(|(_, r, s)| (*r, *s) == (round, starter))
                .count();
            assert!(covered > 0, "round {round} {starter} has no boards");
        }
    }

    for (board, round, starter) in boards {
        for difficulty in Difficulty::iter() {
            let mut played = board.clone();
            let before = played.count(X);
            decide_move(&mut played, round, starter, difficulty, &mut rng()).unwrap_or_else(
                |err| panic!("{difficulty} round {round} {starter} on {board:?}: {err}"),
            );
            assert_eq!(played.count(X), before + 1);
            assert_eq!(played.count(O), board.count(O));
        }
    }
}

#[test]
fn test_inconsistent_boards_are_invalid() {
    for (board, round, starter) in playable_boards() {
        for (wrong_round, wrong_starter) in [(round + 1, starter), (round, starter.toggle())] {
            let mut played = board.clone();
            let result = decide_move(
                &mut played,
                wrong_round,
                wrong_starter,
                Difficulty::Hard,
                &mut rng(),
            );
            assert!(
                matches!(
                    result,
                    Err(DecisionError::InvalidBoardState(
                        BoardError::InconsistentMarks { .. }
                    ))
                ),
                "round {wrong_round} {wrong_starter}: {result:?}"
            );
            assert_eq!(played, board);
        }
    }
}

#[test]
fn test_hard_round_two_uses_strategy_only() {
    // Agent opened A0, opponent answered in the center.
    let mut board = Board::with_marks([(Position::TopLeft, X), (Position::Center, O)]);
    let decision = decide_move(&mut board, 2, Starter::Agent, Difficulty::Hard, &mut rng())
        .expect("move");
    assert_eq!(decision, Decision::new(Position::BottomRight, RuleKind::Strategy));
}

#[test]
fn test_hard_round_three_strategizes() {
    // X on A0 and B2, O on B0 and C1: no line is threatened.
    let mut board = Board::with_marks([
        (Position::TopLeft, X),
        (Position::BottomCenter, X),
        (Position::TopCenter, O),
        (Position::MiddleRight, O),
    ]);
    let decision = decide_move(&mut board, 3, Starter::Agent, Difficulty::Hard, &mut rng())
        .expect("move");
    assert_eq!(decision, Decision::new(Position::TopRight, RuleKind::Strategy));
}

#[test]
fn test_hard_round_four_skips_strategy() {
    // Rows top to bottom: X X O / O _ X / _ O _, nothing threatened.
    let mut board = Board::with_marks([
        (Position::TopLeft, X),
        (Position::TopCenter, X),
        (Position::MiddleRight, X),
        (Position::TopRight, O),
        (Position::MiddleLeft, O),
        (Position::BottomCenter, O),
    ]);
    assert_eq!(try_finish(&board), None);
    assert_eq!(try_block(&board), None);
    let decision = decide_move(&mut board, 4, Starter::Agent, Difficulty::Hard, &mut rng())
        .expect("move");
    assert_eq!(decision, Decision::new(Position::Center, RuleKind::SeekSpace));
}

#[test]
fn test_full_drawn_board() {
    // Rows top to bottom: O X O / O X X / X O O
    let mut board = Board::with_marks([
        (Position::TopLeft, O),
        (Position::TopCenter, X),
        (Position::TopRight, O),
        (Position::MiddleLeft, O),
        (Position::Center, X),
        (Position::MiddleRight, X),
        (Position::BottomLeft, X),
        (Position::BottomCenter, O),
        (Position::BottomRight, O),
    ]);
    assert!(is_draw(&board));
    let result = decide_move(&mut board, 5, Starter::Opponent, Difficulty::Hard, &mut rng());
    assert!(matches!(result, Err(DecisionError::ExhaustedCascade { round: 5, .. })));
}
