//! Denying the opponent's line.

use super::first_completion;
use crate::position::Position;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Finds the cell the opponent needs to complete a line.
///
/// Same scan order and first-match rule as [`super::try_finish`].
#[instrument(skip(board))]
pub fn try_block(board: &Board) -> Option<Position> {
    let found = first_completion(board, Player::Opponent);
    debug!(?found, "Blocker scanned board");
    found
}
