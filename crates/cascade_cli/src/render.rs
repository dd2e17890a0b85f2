//! Text rendering of boards.

use cascade_core::{Board, Column, Row, Square};
use strum::IntoEnumIterator;

const TOP: &str = "  ┌───┬───┬───┐";
const DIVIDER: &str = "  ├───┼───┼───┤";
const BOTTOM: &str = "  └───┴───┴───┘";

/// Draws `board` as a boxed grid with column letters and row numbers.
///
/// ```text
///     A   B   C
///   ┌───┬───┬───┐
/// 1 │ X │   │   │
///   ├───┼───┼───┤
/// 2 │   │ O │   │
///   ├───┼───┼───┤
/// 3 │   │   │   │
///   └───┴───┴───┘
/// ```
pub fn render_board(board: &Board) -> String {
    let header: String = Column::iter()
        .map(|column| format!("   {}", column.letter()))
        .collect();

    let mut lines = vec![format!(" {header}"), TOP.to_string()];
    for row in Row::iter() {
        if row != Row::Top {
            lines.push(DIVIDER.to_string());
        }
        let cells: String = Column::iter()
            .map(|column| format!(" {} │", cell_symbol(board.cell(column, row))))
            .collect();
        lines.push(format!("{} │{cells}", row.number()));
    }
    lines.push(BOTTOM.to_string());
    lines.join("\n")
}

fn cell_symbol(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(player) => player.symbol(),
    }
}
