//! The indexed, read-only table of levels a session plays through.

use std::ops::Index;

use tracing::debug;

use crate::constants::{RawLevel, RAW_LEVELS};
use crate::error::{GameError, GameResult, ParseError};
use crate::map::level::Level;

/// An ordered, immutable sequence of validated levels, addressed `0..level_count()`.
///
/// A catalog is never empty. It does not wrap or clamp indices; advancing past the last
/// level is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Builds a catalog from raw layouts, validating every one of them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLevelData`] naming the first level that fails validation,
    /// or naming level 0 with [`ParseError::EmptyCatalog`] when `raw_levels` is empty.
    pub fn new(raw_levels: &[RawLevel]) -> GameResult<Self> {
        if raw_levels.is_empty() {
            return Err(GameError::InvalidLevelData {
                level: 0,
                source: ParseError::EmptyCatalog,
            });
        }

        let levels = raw_levels
            .iter()
            .enumerate()
            .map(|(level, raw)| Level::from_raw(raw).map_err(|source| GameError::InvalidLevelData { level, source }))
            .collect::<GameResult<Vec<_>>>()?;

        debug!(count = levels.len(), "Built level catalog");
        Ok(Self { levels })
    }

    /// Builds the catalog of builtin levels.
    pub fn builtin() -> GameResult<Self> {
        Self::new(&RAW_LEVELS)
    }

    /// Returns the number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Returns the level at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] when `index >= level_count()`.
    pub fn level_at(&self, index: usize) -> GameResult<&Level> {
        self.levels
            .get(index)
            .ok_or_else(|| GameError::level_out_of_range(index, self.level_count()))
    }

    /// The first level. Always present.
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Index<usize> for LevelCatalog {
    type Output = Level;

    fn index(&self, index: usize) -> &Level {
        &self.levels[index]
    }
}
