//! Rule-cascade tic-tac-toe opponent.
//!
//! The agent (`X`) chooses its move by trying a fixed chain of rules and
//! taking the first cell any rule names:
//!
//! 1. **Finish**: complete a line of its own.
//! 2. **Block**: take the cell the opponent (`O`) needs to complete a line.
//! 3. **Strategize**: hand-tuned opening and fork tables.
//! 4. **Seek space**: center, then edges, then corners.
//! 5. **Random**: any empty cell.
//!
//! Which rules run depends on the [`Difficulty`], the round and the
//! [`Starter`]; see [`plan`].
//!
//! # Example
//!
//! ```
//! use cascade_core::{Board, Bot, Difficulty, Position, Starter};
//!
//! let mut bot = Bot::with_seed(Difficulty::Hard, 7);
//! let mut board = Board::new();
//! let decision = bot.play(&mut board, 1, Starter::Agent)?;
//! assert_eq!(decision.position, Position::TopLeft);
//! # Ok::<(), cascade_core::DecisionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatcher;
mod error;
mod position;
pub mod rules;
mod snapshot;
pub mod strategy;
mod types;

pub use dispatcher::{
    Bot, Decision, OPENING_MOVE, RuleKind, Step, StrategyEntry, decide_move, expected_marks, plan,
};
pub use error::{BoardError, DecisionError};
pub use position::{Column, LINES, Position, Row, SCAN_ORDER};
pub use rules::{has_won, is_draw, is_full, winner};
pub use snapshot::BoardSnapshot;
pub use strategy::{
    RoundBucket, RoundSelector, build_strategy, find_empty_space, pick_random_empty, try_block,
    try_finish,
};
pub use types::{Board, Difficulty, Player, Square, Starter};
