use glam::IVec2;
use strum_macros::AsRefStr;

/// Why a move left the player where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BlockReason {
    /// The neighbouring cell is a wall.
    Wall,
    /// The neighbouring cell is off the board.
    Edge,
}

/// The resolution of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player stepped onto a non-goal tile.
    Moved { from: IVec2, to: IVec2 },
    /// The move was rejected; the player is still at `at`.
    Blocked { at: IVec2, reason: BlockReason },
    /// The player stepped onto a goal tile.
    Completed { from: IVec2, at: IVec2 },
}

impl MoveOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, MoveOutcome::Completed { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }

    /// The player's position after the move.
    pub fn position(&self) -> IVec2 {
        match *self {
            MoveOutcome::Moved { to, .. } => to,
            MoveOutcome::Blocked { at, .. } | MoveOutcome::Completed { at, .. } => at,
        }
    }
}
