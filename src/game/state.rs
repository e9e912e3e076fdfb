use glam::IVec2;

use crate::map::level::{Level, TileGrid};

/// The mutable session record.
///
/// The grid is a copy of the level's canonical grid, so nothing done during play can reach
/// back into the catalog. A level change replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Index of the active level in the catalog.
    pub level_index: usize,
    /// The live copy of the active level's tiles.
    pub grid: TileGrid,
    /// The player's cell. Always on the board and never on a wall.
    pub player: IVec2,
    /// Moves accepted since the level was last reset.
    pub moves: u32,
}

impl GameState {
    /// Creates a fresh session record for `level`, with the player on its start cell.
    pub fn from_level(level_index: usize, level: &Level) -> Self {
        Self {
            level_index,
            grid: level.grid().clone(),
            player: level.start(),
            moves: 0,
        }
    }
}
