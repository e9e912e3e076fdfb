use glam::IVec2;
use strum_macros::{AsRefStr, EnumIter};

use crate::error::GameError;

/// The four cardinal directions.
///
/// Declaration order matches the numeric direction codes: `0=Up, 1=Right, 2=Down, 3=Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Returns the one-cell offset of this direction. Rows grow downwards.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Returns the direction whose one-cell offset is `offset`, if any.
    pub fn from_ivec2(offset: IVec2) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|dir| dir.as_ivec2() == offset)
    }

    /// Returns the numeric code of the direction (0-3).
    pub const fn code(self) -> i32 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = GameError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Right),
            2 => Ok(Direction::Down),
            3 => Ok(Direction::Left),
            _ => Err(GameError::InvalidDirection(code)),
        }
    }
}
