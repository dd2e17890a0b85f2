//! Single non-interactive decisions.

use cascade_core::{Board, BoardSnapshot, Bot, Decision, DecisionError, Difficulty, Starter};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Inputs for one decision.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DecideRequest {
    board: BoardSnapshot,
    round: u8,
    starter: Starter,
    difficulty: Difficulty,
    seed: Option<u64>,
}

/// The move and the board after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecideReport {
    /// The agent's move.
    pub decision: Decision,
    /// Board with the move applied.
    pub board: BoardSnapshot,
}

/// Runs the cascade once on a snapshot.
#[instrument(skip(request), fields(round = request.round, difficulty = %request.difficulty))]
pub fn decide(request: &DecideRequest) -> Result<DecideReport, DecisionError> {
    let mut board: Board = request.board.to_board()?;
    let mut bot = match request.seed {
        Some(seed) => Bot::with_seed(request.difficulty, seed),
        None => Bot::new(request.difficulty),
    };
    let decision = bot.play(&mut board, request.round, request.starter)?;
    info!(position = %decision.position, rule = ?decision.rule, "Decided");
    Ok(DecideReport {
        decision,
        board: BoardSnapshot::from(&board),
    })
}
