//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: a full board on which nobody holds a line.
///
/// The turn loop asks this only after the win check missed, so the
/// extra winner scan is redundant there but keeps the answer correct
/// for any caller.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
