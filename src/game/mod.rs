//! This module contains the main game logic and state.

use std::sync::Arc;

use glam::IVec2;
use tracing::{debug, info};

use crate::constants::Tile;
use crate::error::GameResult;
use crate::map::catalog::LevelCatalog;
use crate::map::direction::Direction;
use crate::map::level::{Level, TileGrid};

use self::events::{BlockReason, MoveOutcome};
use self::state::GameState;

pub mod events;
pub mod state;

/// The `Game` struct is the engine's entry point.
///
/// It owns the live session (active level, its grid, the player) and resolves one discrete
/// move per call. Every operation runs to completion without blocking; callers that share a
/// `Game` between threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct Game {
    catalog: Arc<LevelCatalog>,
    state: GameState,
}

impl Game {
    /// Creates a game over `catalog`, already initialized on its first level.
    pub fn new(catalog: Arc<LevelCatalog>) -> Game {
        let state = GameState::from_level(0, catalog.first());
        Game { catalog, state }
    }

    /// Creates a game over the builtin levels.
    pub fn builtin() -> GameResult<Game> {
        Ok(Game::new(Arc::new(LevelCatalog::builtin()?)))
    }

    /// Resets the session to level 0 with the player on its start cell.
    ///
    /// Safe to call at any time; nothing from the previous session survives.
    pub fn initialize(&mut self) {
        self.state = GameState::from_level(0, self.catalog.first());
        debug!("Initialized");
    }

    /// Makes `index` the active level, copying its grid and moving the player to its start.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::IndexOutOfRange`] when `index >= level_count()`.
    /// The session is left untouched in that case.
    pub fn reset_level(&mut self, index: usize) -> GameResult<()> {
        let level = self.catalog.level_at(index)?;
        self.state = GameState::from_level(index, level);
        debug!(level = index, start = ?self.state.player, "Reset level");
        Ok(())
    }

    /// Restarts the active level from its start cell.
    pub fn restart_level(&mut self) {
        let index = self.state.level_index;
        self.state = GameState::from_level(index, &self.catalog[index]);
        debug!(level = index, "Restarted level");
    }

    /// Moves on to the next level, wrapping from the last level back to the first.
    ///
    /// This is the usual response to a completed move, but it is never applied implicitly.
    /// Returns the new level index.
    pub fn advance_level(&mut self) -> usize {
        let next = (self.state.level_index + 1) % self.catalog.level_count();
        self.state = GameState::from_level(next, &self.catalog[next]);
        info!(level = next, start = ?self.state.player, "Advanced level");
        next
    }

    /// Applies one step in `direction` and reports how it resolved.
    ///
    /// Stepping off the board or into a wall leaves the player in place. Reaching a goal
    /// only reports completion; the active level does not change.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.state.player;
        let candidate = from + direction.as_ivec2();

        let outcome = match self.state.grid.get(candidate) {
            None => MoveOutcome::Blocked {
                at: from,
                reason: BlockReason::Edge,
            },
            Some(Tile::Wall) => MoveOutcome::Blocked {
                at: from,
                reason: BlockReason::Wall,
            },
            Some(tile) => {
                self.state.player = candidate;
                self.state.moves = self.state.moves.saturating_add(1);
                if tile == Tile::Goal {
                    MoveOutcome::Completed { from, at: candidate }
                } else {
                    MoveOutcome::Moved { from, to: candidate }
                }
            }
        };

        match outcome {
            MoveOutcome::Blocked { at, reason } => debug!(?direction, ?at, ?reason, "Move blocked"),
            MoveOutcome::Moved { from, to } => debug!(?direction, ?from, ?to, "Moved"),
            MoveOutcome::Completed { at, .. } => info!(
                level = self.state.level_index,
                ?at,
                moves = self.state.moves,
                "Reached goal"
            ),
        }

        outcome
    }

    /// Applies one step in `direction`, returning `true` if it landed on a goal.
    pub fn update(&mut self, direction: Direction) -> bool {
        self.step(direction).is_completed()
    }

    /// Applies one step given a numeric direction code (`0=Up, 1=Right, 2=Down, 3=Left`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::InvalidDirection`] for any other code, without moving.
    pub fn update_code(&mut self, code: i32) -> GameResult<bool> {
        let direction = Direction::try_from(code)?;
        Ok(self.update(direction))
    }

    pub fn player_position(&self) -> IVec2 {
        self.state.player
    }

    /// Returns the tile of the active grid at `row * width + column`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GameError::IndexOutOfRange`] when the index is past the grid.
    pub fn tile_at(&self, linear_index: usize) -> GameResult<Tile> {
        self.state.grid.tile_at(linear_index)
    }

    pub fn current_level_index(&self) -> usize {
        self.state.level_index
    }

    /// The catalog entry of the active level.
    pub fn current_level(&self) -> &Level {
        &self.catalog[self.state.level_index]
    }

    pub fn level_count(&self) -> usize {
        self.catalog.level_count()
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// The live grid of the active level.
    pub fn grid(&self) -> &TileGrid {
        &self.state.grid
    }

    /// Moves accepted since the active level was last reset.
    pub fn moves(&self) -> u32 {
        self.state.moves
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
