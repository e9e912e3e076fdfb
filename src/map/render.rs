//! Map rendering functionality.

use glam::IVec2;

use crate::map::level::TileGrid;

/// The character drawn for the player token.
pub const PLAYER_CHAR: char = '@';

/// Handles text rendering of a board.
pub struct MapRenderer;

impl MapRenderer {
    /// Renders the board one text line per row, with the player drawn over its tile.
    ///
    /// Every line, including the last, ends with `'\n'`.
    pub fn render_board(grid: &TileGrid, player: IVec2) -> String {
        let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);

        for (y, row) in grid.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if IVec2::new(x as i32, y as i32) == player {
                    out.push(PLAYER_CHAR);
                } else {
                    out.push(tile.as_char());
                }
            }
            out.push('\n');
        }

        out
    }
}
