//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;
use smallvec::SmallVec;

use crate::constants::{Tile, BOARD_CELL_SIZE};
use crate::error::ParseError;
use crate::map::level::TileGrid;

/// Structured representation of a parsed ASCII board with its special positions extracted.
///
/// Parsing already guarantees exactly one start and at least one goal; whether a goal can be
/// reached is checked afterwards by [`crate::map::level::Level::from_raw`].
#[derive(Debug)]
pub struct ParsedLevel {
    /// Tiles converted from ASCII characters
    pub tiles: TileGrid,
    /// The single cell marked `S`
    pub start: IVec2,
    /// Every cell marked `G`, in row-major order
    pub goals: SmallVec<[IVec2; 4]>,
}

/// Parser for converting raw board layouts into structured level data.
pub struct LevelParser;

impl LevelParser {
    /// Converts an ASCII character from a board layout into its tile.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnknownCharacter` for any character outside `# .SG`.
    pub fn parse_character(c: char) -> Result<Tile, ParseError> {
        match c {
            '#' => Ok(Tile::Wall),
            ' ' | '.' => Ok(Tile::Empty),
            'G' => Ok(Tile::Goal),
            'S' => Ok(Tile::Start),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured level data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is not exactly `BOARD_CELL_SIZE` in size, contains unknown
    /// characters, does not have exactly one start, or has no goal.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedLevel, ParseError> {
        if raw_board.len() != BOARD_CELL_SIZE.y as usize {
            return Err(ParseError::InvalidDimensions(format!(
                "expected {} rows, got {}",
                BOARD_CELL_SIZE.y,
                raw_board.len()
            )));
        }

        for (i, line) in raw_board.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_CELL_SIZE.x as usize {
                return Err(ParseError::InvalidDimensions(format!(
                    "expected {} columns at row {}, got {}",
                    BOARD_CELL_SIZE.x, i, width
                )));
            }
        }

        let mut tiles = TileGrid::new();
        let mut starts: SmallVec<[IVec2; 1]> = SmallVec::new();
        let mut goals = SmallVec::new();

        for (y, line) in raw_board.iter().enumerate() {
            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let pos = IVec2::new(x as i32, y as i32);

                match tile {
                    Tile::Start => starts.push(pos),
                    Tile::Goal => goals.push(pos),
                    _ => {}
                }

                tiles.set(pos, tile);
            }
        }

        let start = match starts.as_slice() {
            [start] => *start,
            _ => return Err(ParseError::InvalidStartCount(starts.len())),
        };

        if goals.is_empty() {
            return Err(ParseError::MissingGoal);
        }

        Ok(ParsedLevel { tiles, start, goals })
    }
}
