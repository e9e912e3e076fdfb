//! Key bindings for the text front end.

use std::collections::HashMap;

use tracing::trace;

use crate::{input::commands::GameCommand, map::direction::Direction};

pub mod commands;

const ESCAPE: char = '\x1b';

#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<char, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Player movement: WASD and IJKL
        key_bindings.insert('w', GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert('i', GameCommand::MovePlayer(Direction::Up));
        key_bindings.insert('d', GameCommand::MovePlayer(Direction::Right));
        key_bindings.insert('l', GameCommand::MovePlayer(Direction::Right));
        key_bindings.insert('s', GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert('k', GameCommand::MovePlayer(Direction::Down));
        key_bindings.insert('a', GameCommand::MovePlayer(Direction::Left));
        key_bindings.insert('j', GameCommand::MovePlayer(Direction::Left));

        // Game actions
        key_bindings.insert('r', GameCommand::ResetLevel);
        key_bindings.insert('q', GameCommand::Exit);
        key_bindings.insert(ESCAPE, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    /// Looks up the command bound to a single key, ignoring ASCII case.
    pub fn command_for(&self, key: char) -> Option<GameCommand> {
        self.key_bindings.get(&key.to_ascii_lowercase()).copied()
    }

    /// Decodes a line of terminal input into commands, in order.
    ///
    /// Arrow keys arrive as `ESC [ A..D` and map to movement; a lone `ESC` exits. Unbound
    /// keys are skipped.
    pub fn decode_line(&self, line: &str) -> Vec<GameCommand> {
        let mut commands = Vec::new();
        let mut chars = line.chars().peekable();

        while let Some(key) = chars.next() {
            if key == ESCAPE && chars.peek() == Some(&'[') {
                let _ = chars.next();
                let arrow = match chars.next() {
                    Some('A') => Some(Direction::Up),
                    Some('B') => Some(Direction::Down),
                    Some('C') => Some(Direction::Right),
                    Some('D') => Some(Direction::Left),
                    _ => None,
                };
                if let Some(direction) = arrow {
                    commands.push(GameCommand::MovePlayer(direction));
                }
                continue;
            }

            match self.command_for(key) {
                Some(command) => commands.push(command),
                None => trace!(?key, "Ignoring unbound key"),
            }
        }

        commands
    }
}
