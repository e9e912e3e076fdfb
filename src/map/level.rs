//! Immutable level records and the tile grid they are stored in.

use glam::IVec2;
use pathfinding::prelude::dijkstra;
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::{RawLevel, Tile, BOARD_CELL_COUNT, BOARD_CELL_SIZE};
use crate::error::{GameError, GameResult, ParseError};
use crate::map::direction::Direction;
use crate::map::parser::LevelParser;

/// A fixed-size board of tiles stored row-major, so cell `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: [Tile; BOARD_CELL_COUNT],
}

impl TileGrid {
    /// Creates a grid where every cell is [`Tile::Empty`].
    pub fn new() -> Self {
        Self {
            tiles: [Tile::Empty; BOARD_CELL_COUNT],
        }
    }

    /// Width of the grid, in cells.
    pub const fn width(&self) -> i32 {
        BOARD_CELL_SIZE.x as i32
    }

    /// Height of the grid, in cells.
    pub const fn height(&self) -> i32 {
        BOARD_CELL_SIZE.y as i32
    }

    /// Number of cells in the grid.
    pub const fn len(&self) -> usize {
        BOARD_CELL_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        BOARD_CELL_COUNT == 0
    }

    /// Whether `pos` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }

    /// Converts a cell position into its linear index.
    pub fn index_of(&self, pos: IVec2) -> Option<usize> {
        self.contains(pos).then(|| (pos.y * self.width() + pos.x) as usize)
    }

    /// Converts a linear index back into a cell position.
    pub fn position_of(&self, index: usize) -> Option<IVec2> {
        (index < self.len()).then(|| {
            let width = self.width() as usize;
            IVec2::new((index % width) as i32, (index / width) as i32)
        })
    }

    /// Returns the tile at `pos`, or `None` when `pos` is off the board.
    pub fn get(&self, pos: IVec2) -> Option<Tile> {
        self.index_of(pos).map(|index| self.tiles[index])
    }

    /// Returns the tile at a linear index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] when `index >= width * height`.
    pub fn tile_at(&self, index: usize) -> GameResult<Tile> {
        let tile = self
            .tiles
            .get(index)
            .copied()
            .ok_or_else(|| GameError::tile_out_of_range(index, self.len()))?;
        trace!(index, ?tile, "Tile lookup");
        Ok(tile)
    }

    pub(crate) fn set(&mut self, pos: IVec2, tile: Tile) {
        if let Some(index) = self.index_of(pos) {
            self.tiles[index] = tile;
        }
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width() as usize)
    }

    /// Iterates over every cell together with its position.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(index, tile)| self.position_of(index).map(|pos| (pos, *tile)))
    }

    /// Positions one step away from `pos` that are on the board and not walls.
    pub fn walkable_neighbours(&self, pos: IVec2) -> impl Iterator<Item = IVec2> + '_ {
        Direction::DIRECTIONS
            .into_iter()
            .map(move |dir| pos + dir.as_ivec2())
            .filter(|next| self.get(*next).is_some_and(Tile::is_walkable))
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated level: its board, its single start cell and its goal cells.
///
/// Levels are built once, when the catalog is constructed, and never change afterwards.
/// Gameplay works on a copy of [`Level::grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: &'static str,
    grid: TileGrid,
    start: IVec2,
    goals: SmallVec<[IVec2; 4]>,
}

impl Level {
    /// Parses and validates a raw level layout.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the board is malformed, has a start count other than one,
    /// has no goal, or none of its goals can be reached from the start.
    pub fn from_raw(raw: &RawLevel) -> Result<Level, ParseError> {
        let parsed = LevelParser::parse_board(raw.board)?;
        let level = Level {
            name: raw.name,
            grid: parsed.tiles,
            start: parsed.start,
            goals: parsed.goals,
        };

        if level.shortest_path().is_none() {
            return Err(ParseError::UnreachableGoal(level.start));
        }

        Ok(level)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical board of this level.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// The cell tagged [`Tile::Start`].
    pub fn start(&self) -> IVec2 {
        self.start
    }

    /// Every cell tagged [`Tile::Goal`], in row-major order.
    pub fn goals(&self) -> &[IVec2] {
        &self.goals
    }

    pub fn tile(&self, pos: IVec2) -> Option<Tile> {
        self.grid.get(pos)
    }

    /// Computes the shortest sequence of moves leading from the start to the nearest goal.
    ///
    /// Returns `None` if no goal is reachable.
    pub fn shortest_path(&self) -> Option<Vec<Direction>> {
        let (path, cost) = dijkstra(
            &self.start,
            |&pos| self.grid.walkable_neighbours(pos).map(|next| (next, 1u32)),
            |pos| self.grid.get(*pos) == Some(Tile::Goal),
        )?;
        trace!(level = self.name, cost, "Solved level");

        Some(
            path.windows(2)
                .filter_map(|step| Direction::from_ivec2(step[1] - step[0]))
                .collect(),
        )
    }
}
