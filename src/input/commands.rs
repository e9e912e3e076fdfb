use crate::map::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    ResetLevel,
    Exit,
}
