use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, event};

use crate::formatter;
use crate::game::Game;
use crate::input::{commands::GameCommand, Bindings};
use crate::map::render::MapRenderer;

/// What the input loop does after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFlow {
    Continue,
    /// A goal was reached and the next level is loaded.
    LevelAdvanced,
    Exit,
}

/// The text front end: reads key lines from `input`, drives the [`Game`], draws to `output`.
///
/// Level advance lives here, on top of the engine: when a move reports completion the app
/// moves to the next level, wrapping after the last one.
pub struct App<R, W> {
    game: Game,
    bindings: Bindings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            bindings: Bindings::default(),
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Draws the board, then processes input until exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;
        while self.run_turn()? {}
        Ok(())
    }

    /// Reads and applies one line of input, redrawing afterwards.
    ///
    /// Returns `false` once the user asked to exit or the input is exhausted.
    pub fn run_turn(&mut self) -> Result<bool> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            event!(tracing::Level::INFO, "End of input. Exiting...");
            return Ok(false);
        }
        formatter::increment_turn();

        for command in self.bindings.decode_line(line.trim_end_matches(['\r', '\n'])) {
            match self.handle_command(command) {
                CommandFlow::Continue => {}
                CommandFlow::LevelAdvanced => {
                    // Keys typed after the goal belong to the finished level
                    debug!("Dropping remaining keys of the line");
                    break;
                }
                CommandFlow::Exit => {
                    event!(tracing::Level::INFO, "Exit requested. Exiting...");
                    return Ok(false);
                }
            }
        }

        self.draw()?;
        Ok(true)
    }

    /// Applies a single command and reports how the rest of the line should be handled.
    pub fn handle_command(&mut self, command: GameCommand) -> CommandFlow {
        match command {
            GameCommand::MovePlayer(direction) => {
                if self.game.update(direction) {
                    self.game.advance_level();
                    return CommandFlow::LevelAdvanced;
                }
                CommandFlow::Continue
            }
            GameCommand::ResetLevel => {
                self.game.restart_level();
                CommandFlow::Continue
            }
            GameCommand::Exit => CommandFlow::Exit,
        }
    }

    fn draw(&mut self) -> Result<()> {
        let level = self.game.current_level();
        let board = MapRenderer::render_board(self.game.grid(), self.game.player_position());

        writeln!(
            self.output,
            "Level {} - {} (moves: {})",
            self.game.current_level_index(),
            level.name(),
            self.game.moves()
        )?;
        self.output.write_all(board.as_bytes())?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
