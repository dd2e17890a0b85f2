//! Board coordinates.
//!
//! A cell is addressed by a [`Column`] (A = left, B = middle, C = right) and a
//! [`Row`] (0 = top). In code and tests a cell is written `A0`..`C2`; players
//! type the one-based form `A 1`..`C 3`.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Board column, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Column {
    /// Left column.
    A,
    /// Middle column.
    B,
    /// Right column.
    C,
}

impl Column {
    /// Zero-based index of the column.
    pub fn index(self) -> usize {
        match self {
            Column::A => 0,
            Column::B => 1,
            Column::C => 2,
        }
    }

    /// Column from its zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Column::A),
            1 => Some(Column::B),
            2 => Some(Column::C),
            _ => None,
        }
    }

    /// Column from its letter, case-insensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Column::A),
            'B' => Some(Column::B),
            'C' => Some(Column::C),
            _ => None,
        }
    }

    /// Upper-case letter of the column.
    pub fn letter(self) -> char {
        match self {
            Column::A => 'A',
            Column::B => 'B',
            Column::C => 'C',
        }
    }
}

/// Board row, top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Row {
    /// Top row (typed as `1`).
    Top,
    /// Middle row (typed as `2`).
    Middle,
    /// Bottom row (typed as `3`).
    Bottom,
}

impl Row {
    /// Zero-based index of the row.
    pub fn index(self) -> usize {
        match self {
            Row::Top => 0,
            Row::Middle => 1,
            Row::Bottom => 2,
        }
    }

    /// Row from its zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Row::Top),
            1 => Some(Row::Middle),
            2 => Some(Row::Bottom),
            _ => None,
        }
    }

    /// Row from the one-based number a player types.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// One-based number shown to players.
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

/// A cell on the tic-tac-toe board.
///
/// Variant names follow the screen layout; the doc comment on each variant
/// gives its column/row name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// A0
    TopLeft,
    /// B0
    TopCenter,
    /// C0
    TopRight,
    /// A1
    MiddleLeft,
    /// B1
    Center,
    /// C1
    MiddleRight,
    /// A2
    BottomLeft,
    /// B2
    BottomCenter,
    /// C2
    BottomRight,
}

/// Column-major scan order used by the line-completion rules.
pub const SCAN_ORDER: [Position; 9] = [
    Position::TopLeft,
    Position::MiddleLeft,
    Position::BottomLeft,
    Position::TopCenter,
    Position::Center,
    Position::BottomCenter,
    Position::TopRight,
    Position::MiddleRight,
    Position::BottomRight,
];

/// The eight three-in-a-row lines.
pub const LINES: [[Position; 3]; 8] = [
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

impl Position {
    /// Position at the given column and row.
    pub fn at(column: Column, row: Row) -> Self {
        use Position::*;

        match (column, row) {
            (Column::A, Row::Top) => TopLeft,
            (Column::B, Row::Top) => TopCenter,
            (Column::C, Row::Top) => TopRight,
            (Column::A, Row::Middle) => MiddleLeft,
            (Column::B, Row::Middle) => Center,
            (Column::C, Row::Middle) => MiddleRight,
            (Column::A, Row::Bottom) => BottomLeft,
            (Column::B, Row::Bottom) => BottomCenter,
            (Column::C, Row::Bottom) => BottomRight,
        }
    }

    /// Column of this position.
    pub fn column(self) -> Column {
        match self.to_index() % 3 {
            0 => Column::A,
            1 => Column::B,
            _ => Column::C,
        }
    }

    /// Row of this position.
    pub fn row(self) -> Row {
        match self.to_index() / 3 {
            0 => Row::Top,
            1 => Row::Middle,
            _ => Row::Bottom,
        }
    }

    /// Row-major board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::iter().nth(index)
    }

    /// Human-readable label, e.g. "Top-left".
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Coordinate as players type it, e.g. `"A 1"`.
    pub fn coordinate(self) -> String {
        format!("{} {}", self.column().letter(), self.row().number())
    }

    /// Whether this is one of the four corners.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }

    /// Lines passing through this position, each given as the two other cells.
    pub fn partner_pairs(self) -> impl Iterator<Item = [Position; 2]> {
        LINES.into_iter().filter_map(move |[a, b, c]| {
            if a == self {
                Some([b, c])
            } else if b == self {
                Some([a, c])
            } else if c == self {
                Some([a, b])
            } else {
                None
            }
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column().letter(), self.row().index())
    }
}
