//! Positional fallback.

use crate::position::Position;
use crate::types::Board;
use tracing::{debug, instrument};

/// Preference order: center, then B0, B2, C1, the last edge A1, then corners.
pub const SPACE_PREFERENCE: [Position; 9] = [
    Position::Center,
    Position::TopCenter,
    Position::BottomCenter,
    Position::MiddleRight,
    Position::MiddleLeft,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Takes the first empty cell in [`SPACE_PREFERENCE`] order.
///
/// Returns `None` only on a full board.
#[instrument(skip(board))]
pub fn find_empty_space(board: &Board) -> Option<Position> {
    let found = SPACE_PREFERENCE
        .into_iter()
        .find(|&pos| board.is_empty(pos));
    debug!(?found, "Space-seeker scanned board");
    found
}
