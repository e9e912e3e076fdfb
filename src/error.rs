//! Centralized error types for the labyrinth engine.
//!
//! Bumping into a wall or the edge of the board is not an error; [`crate::game::Game::update`]
//! reports it as a plain `false`. Everything defined here is either a broken caller contract
//! (an index or direction code that cannot exist) or defective level data caught at startup.

use glam::IVec2;
use strum_macros::Display;

/// Main error type for the engine.
///
/// This is the error type used in public APIs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{space} index {index} is out of range 0..{len}")]
    IndexOutOfRange { space: IndexSpace, index: usize, len: usize },

    #[error("Invalid direction code: {0}")]
    InvalidDirection(i32),

    #[error("Invalid data for level {level}: {source}")]
    InvalidLevelData {
        level: usize,
        #[source]
        source: ParseError,
    },
}

/// Which table an out-of-range index was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IndexSpace {
    /// The level catalog, addressed by level number.
    Level,
    /// The active board, addressed by `row * width + column`.
    Tile,
}

/// Error type for board parsing and level validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Unknown tile code: {0}")]
    UnknownTileCode(u8),

    #[error("Invalid board dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Board must have exactly 1 start position, found {0}")]
    InvalidStartCount(usize),

    #[error("Board has no goal")]
    MissingGoal,

    #[error("No goal is reachable from the start at ({}, {})", .0.x, .0.y)]
    UnreachableGoal(IVec2),

    #[error("Level catalog is empty")]
    EmptyCatalog,
}

impl GameError {
    pub(crate) fn level_out_of_range(index: usize, len: usize) -> Self {
        GameError::IndexOutOfRange {
            space: IndexSpace::Level,
            index,
            len,
        }
    }

    pub(crate) fn tile_out_of_range(index: usize, len: usize) -> Self {
        GameError::IndexOutOfRange {
            space: IndexSpace::Tile,
            index,
            len,
        }
    }
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
