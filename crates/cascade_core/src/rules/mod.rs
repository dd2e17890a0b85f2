//! Game rules for tic-tac-toe.
//!
//! Pure functions that judge a board. They never modify it and never
//! report anything themselves; announcing the result is the caller's job.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_won, winner};
