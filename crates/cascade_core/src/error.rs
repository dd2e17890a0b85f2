//! Error types for board intake and move decisions.

use crate::types::{Difficulty, Player, Starter};
use derive_more::{Display, Error, From};

/// A board that cannot be handed to the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A required column key is absent.
    #[display("Board snapshot is missing column {column}")]
    MissingColumn {
        /// The absent column letter.
        column: char,
    },

    /// A column key other than A, B, C or the row-label column.
    #[display("Board snapshot has unknown column {key:?}")]
    UnknownColumn {
        /// The offending key.
        key: String,
    },

    /// A column does not hold exactly three cells.
    #[display("Column {column} has {len} cells, expected 3")]
    WrongShape {
        /// Column letter.
        column: char,
        /// Number of cells found.
        len: usize,
    },

    /// A cell holds something other than `X`, `O` or an empty string.
    #[display("Column {column} row {row} holds foreign symbol {symbol:?}")]
    ForeignSymbol {
        /// Column letter.
        column: char,
        /// Zero-based row.
        row: usize,
        /// The symbol found.
        symbol: String,
    },

    /// Mark counts that cannot occur before the agent's move in `round`.
    #[display(
        "Round {round} ({starter} started) expects {expected_agent} X and {expected_opponent} O, found {agent} X and {opponent} O"
    )]
    InconsistentMarks {
        /// Round being played.
        round: u8,
        /// Who opened the match.
        starter: Starter,
        /// Agent marks found.
        agent: usize,
        /// Opponent marks found.
        opponent: usize,
        /// Agent marks the round requires.
        expected_agent: usize,
        /// Opponent marks the round requires.
        expected_opponent: usize,
    },

    /// Somebody already has three in a row.
    #[display("Board is already won by {player:?}")]
    AlreadyWon {
        /// The side holding a line.
        player: Player,
    },
}

/// Failure to produce the agent's move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum DecisionError {
    /// The board was rejected before entering the cascade.
    #[display("Invalid board state: {_0}")]
    #[from]
    InvalidBoardState(BoardError),

    /// Rounds are counted from 1.
    #[display("Invalid round {round}: rounds start at 1")]
    InvalidRound {
        /// The rejected round.
        round: u8,
    },

    /// Every rule in the chain declined, which only a full board allows.
    #[display("No rule produced a move in round {round} at {difficulty} difficulty")]
    ExhaustedCascade {
        /// Round being played.
        round: u8,
        /// Tier whose chain was exhausted.
        difficulty: Difficulty,
    },
}
