use std::fmt::Write;

use colored::Colorize;

use super::board::{GameBoard, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Plain,

    /// Live cells are printed green.
    Colored,
}

/// One line per board row with every cell value followed by a space, then a blank line
/// separating this board from the next one.
pub fn render(board: &GameBoard, style: RenderStyle) -> String {
    let mut out = String::with_capacity((board.columns * 2 + 1) * board.rows + 1);

    for row in board.tile_rows() {
        for tile in row {
            match (style, tile) {
                (RenderStyle::Colored, TileState::Alive) => {
                    // Writing into a String can't fail.
                    let _ = write!(out, "{} ", tile.value().to_string().green());
                }
                _ => {
                    let _ = write!(out, "{} ", tile.value());
                }
            }
        }

        out.push('\n');
    }

    out.push('\n');
    out
}
