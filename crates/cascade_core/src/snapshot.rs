//! Column-keyed board snapshots.
//!
//! Boards arriving as data use a map from column letter to its three cells,
//! top to bottom:
//!
//! ```json
//! { "A": ["X", "", ""], "B": ["", "O", ""], "C": ["", "", ""] }
//! ```
//!
//! A `" "` key holding row labels may be present and is ignored.

use crate::error::BoardError;
use crate::position::{Column, Position, Row};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Key of the optional row-label column.
const ROW_LABEL_KEY: &str = " ";

/// Serializable board, keyed by column letter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    columns: BTreeMap<String, Vec<String>>,
}

impl BoardSnapshot {
    /// Wraps an already-built column map.
    pub fn new(columns: BTreeMap<String, Vec<String>>) -> Self {
        Self { columns }
    }

    /// Returns the raw column map.
    pub fn columns(&self) -> &BTreeMap<String, Vec<String>> {
        &self.columns
    }

    /// Validates the snapshot and converts it to a [`Board`].
    #[instrument(skip(self))]
    pub fn to_board(&self) -> Result<Board, BoardError> {
        if let Some(key) = self
            .columns
            .keys()
            .find(|key| key.as_str() != ROW_LABEL_KEY && column_for_key(key).is_none())
        {
            return Err(BoardError::UnknownColumn { key: key.clone() });
        }

        let mut board = Board::new();
        for column in Column::iter() {
            let cells = self
                .columns
                .get(&column.letter().to_string())
                .ok_or(BoardError::MissingColumn {
                    column: column.letter(),
                })?;

            if cells.len() != 3 {
                return Err(BoardError::WrongShape {
                    column: column.letter(),
                    len: cells.len(),
                });
            }

            for (row, symbol) in Row::iter().zip(cells) {
                let square = parse_cell(symbol).ok_or_else(|| BoardError::ForeignSymbol {
                    column: column.letter(),
                    row: row.index(),
                    symbol: symbol.clone(),
                })?;
                board.set(Position::at(column, row), square);
            }
        }

        debug!(occupied = board.occupied_count(), "Snapshot accepted");
        Ok(board)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let columns = Column::iter()
            .map(|column| {
                let cells = Row::iter()
                    .map(|row| match board.cell(column, row) {
                        Square::Empty => String::new(),
                        Square::Occupied(player) => player.symbol().to_string(),
                    })
                    .collect();
                (column.letter().to_string(), cells)
            })
            .collect();
        Self { columns }
    }
}

impl TryFrom<&BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: &BoardSnapshot) -> Result<Self, Self::Error> {
        snapshot.to_board()
    }
}

fn column_for_key(key: &str) -> Option<Column> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Column::from_letter(letter),
        _ => None,
    }
}

fn parse_cell(symbol: &str) -> Option<Square> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(Square::Empty),
        (Some(c), None) => Player::from_symbol(c).map(Square::Occupied),
        _ => None,
    }
}
