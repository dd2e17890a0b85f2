//! Uniform-random move choice.

use crate::position::{Column, Position, Row};
use crate::rules::is_full;
use crate::types::Board;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks an empty cell uniformly at random.
///
/// Samples (column, row) pairs until an empty one turns up, so every empty
/// cell is equally likely. A full board returns `None` instead of spinning.
#[instrument(skip(board, rng))]
pub fn pick_random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if is_full(board) {
        return None;
    }

    let mut attempts = 0_u32;
    loop {
        attempts += 1;
        let column = Column::from_index(rng.random_range(0..3))?;
        let row = Row::from_index(rng.random_range(0..3))?;
        let pos = Position::at(column, row);
        if board.is_empty(pos) {
            debug!(%pos, attempts, "Random-seeker picked cell");
            return Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_empty_cell_is_found() {
        let mut board = Board::with_marks(Position::iter().map(|p| (p, Player::Agent)));
        board.set(Position::MiddleRight, crate::types::Square::Empty);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_random_empty(&board, &mut rng), Some(Position::MiddleRight));
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let board = Board::with_marks(Position::iter().map(|p| (p, Player::Opponent)));
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random_empty(&board, &mut rng), None);
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let board = Board::with_marks([
            (Position::Center, Player::Opponent),
            (Position::TopLeft, Player::Agent),
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let pos = pick_random_empty(&board, &mut rng).expect("board has space");
            assert!(board.is_empty(pos));
        }
    }
}
