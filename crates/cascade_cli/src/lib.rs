//! Terminal front end for the rule-cascade tic-tac-toe opponent.
//!
//! Wraps [`cascade_core`] with human input, board rendering, a match loop
//! with a running score, TOML configuration and a one-shot JSON mode.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod decide;
mod input;
mod render;
mod session;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use decide::{DecideReport, DecideRequest, decide};
pub use input::{InputError, MoveRejection, Prompter, parse_coordinate, parse_move};
pub use render::render_board;
pub use session::{Outcome, Scoreboard, Session, SessionError, check_end};
