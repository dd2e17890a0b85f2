//! Win detection logic for tic-tac-toe.

use crate::position::LINES;
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `player` holds a full column, row or diagonal.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.is_held_by(pos, player)))
}

/// Returns the player with three in a row, if any.
///
/// When both sides somehow hold a line the agent is reported first.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_won(board, player))
}
