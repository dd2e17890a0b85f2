//! Move rules.
//!
//! Each rule inspects the board and either names a cell for the agent or
//! returns `None` so the next rule in the cascade can try.

mod blocker;
mod finisher;
mod random_seeker;
mod space_seeker;
mod strategist;

pub use blocker::try_block;
pub use finisher::try_finish;
pub use random_seeker::pick_random_empty;
pub use space_seeker::{SPACE_PREFERENCE, find_empty_space};
pub use strategist::{RoundBucket, RoundSelector, build_strategy};

use crate::position::{Position, SCAN_ORDER};
use crate::types::{Board, Player};

/// First empty cell, in scan order, that would give `player` three in a row.
fn first_completion(board: &Board, player: Player) -> Option<Position> {
    SCAN_ORDER.into_iter().find(|&pos| {
        board.is_empty(pos)
            && pos
                .partner_pairs()
                .any(|pair| pair.iter().all(|&other| board.is_held_by(other, player)))
    })
}
