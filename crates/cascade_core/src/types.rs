//! Core domain types for the cascade opponent.

use crate::position::{Column, Position, Row};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// A side in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// The automated opponent, plays `X`.
    Agent,
    /// The human, plays `O`.
    Opponent,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Agent => Player::Opponent,
            Player::Opponent => Player::Agent,
        }
    }

    /// Board symbol for this side.
    pub fn symbol(self) -> char {
        match self {
            Player::Agent => 'X',
            Player::Opponent => 'O',
        }
    }

    /// Side owning the given board symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Player::Agent),
            'O' => Some(Player::Opponent),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order, indexed by [`Position::to_index`].
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `(position, player)` placements.
    ///
    /// Later placements overwrite earlier ones on the same cell.
    pub fn with_marks(marks: impl IntoIterator<Item = (Position, Player)>) -> Self {
        let mut board = Self::new();
        for (pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at the given column and row.
    pub fn cell(&self, column: Column, row: Row) -> Square {
        self.get(Position::at(column, row))
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if a square is held by `player`.
    pub fn is_held_by(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Square::Occupied(player)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        use strum::IntoEnumIterator;

        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Places the agent's mark, returning the position back for chaining.
    #[instrument(skip(self))]
    pub(crate) fn place_agent(&mut self, pos: Position) -> Position {
        self.set(pos, Square::Occupied(Player::Agent));
        pos
    }
}

/// Which side opened the match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Starter {
    /// The agent moved first.
    #[default]
    Agent,
    /// The human moved first.
    Opponent,
}

impl Starter {
    /// The starter of the following match.
    pub fn toggle(self) -> Self {
        match self {
            Starter::Agent => Starter::Opponent,
            Starter::Opponent => Starter::Agent,
        }
    }

    /// The side that moves first.
    pub fn player(self) -> Player {
        match self {
            Starter::Agent => Player::Agent,
            Starter::Opponent => Player::Opponent,
        }
    }
}

/// Difficulty tier, fixed for a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform-random moves.
    Easy,
    /// Win or block when possible, otherwise random.
    Medium,
    /// Full rule cascade.
    Hard,
}
