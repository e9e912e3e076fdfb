#![allow(dead_code)]

use std::sync::Arc;

use glam::IVec2;
use labyrinth::{
    constants::RawLevel,
    game::Game,
    map::{catalog::LevelCatalog, direction::Direction, level::Level},
};
use pathfinding::prelude::{bfs, bfs_reach};

/// A board with no border walls: the start sits in the top-left corner and the goal in the
/// bottom-right, so every edge of the board can be bumped into.
pub const OPEN_LEVEL: RawLevel = RawLevel {
    name: "Open",
    board: &[
        "S...................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "....................",
        "...................G",
    ],
};

/// A walled corridor with the goal two steps to the right of the start.
pub const SHORT_LEVEL: RawLevel = RawLevel {
    name: "Short",
    board: &[
        "####################",
        "#S G               #",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
        "####################",
    ],
};

pub fn catalog_of(levels: &[RawLevel]) -> Arc<LevelCatalog> {
    Arc::new(LevelCatalog::new(levels).expect("fixture levels are valid"))
}

pub fn builtin_game() -> Game {
    Game::builtin().expect("builtin levels are valid")
}

/// Every cell reachable from the level's start, the start included.
pub fn reachable_cells(level: &Level) -> Vec<IVec2> {
    bfs_reach(level.start(), |&pos| level.grid().walkable_neighbours(pos).collect::<Vec<_>>()).collect()
}

/// Builds a game on `level_index` of the builtin catalog with the player walked to `pos`
/// along a shortest route.
pub fn game_at(level_index: usize, pos: IVec2) -> Game {
    let mut game = builtin_game();
    game.reset_level(level_index).unwrap();
    let level = game.current_level().clone();

    let route = bfs(
        &level.start(),
        |&p| level.grid().walkable_neighbours(p).collect::<Vec<_>>(),
        |p| *p == pos,
    )
    .expect("target cell is reachable");

    for step in route.windows(2) {
        let direction = Direction::from_ivec2(step[1] - step[0]).unwrap();
        game.update(direction);
    }
    assert_eq!(game.player_position(), pos);
    game
}
