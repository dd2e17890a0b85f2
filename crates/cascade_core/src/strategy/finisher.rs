//! Completing the agent's own line.

use super::first_completion;
use crate::position::Position;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Finds the cell that completes a line for the agent.
///
/// Cells are scanned A0, A1, A2, B0 .. C2 and the first completing cell wins,
/// even when several exist.
#[instrument(skip(board))]
pub fn try_finish(board: &Board) -> Option<Position> {
    let found = first_completion(board, Player::Agent);
    debug!(?found, "Finisher scanned board");
    found
}
