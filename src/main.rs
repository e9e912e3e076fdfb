use std::io;

use anyhow::{Context, Result};
use labyrinth::{app::App, game::Game, logging};
use tracing::info;

pub fn main() -> Result<()> {
    logging::setup_logging();

    let game = Game::builtin().context("Builtin level data is invalid")?;
    info!(levels = game.level_count(), "Starting labyrinth");

    let stdin = io::stdin();
    let mut app = App::new(game, stdin.lock(), io::stdout());
    app.run()
}
