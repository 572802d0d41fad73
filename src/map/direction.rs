use glam::IVec2;
use strum_macros::{AsRefStr, EnumCount};

/// The eight grid directions a player can step in.
///
/// Deltas are `(row, col)` pairs stored as `IVec2 { x: row, y: col }`:
/// `Up` decreases the row, `Right` increases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumCount)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Row/column delta of a single step.
    pub const fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(-1, 0),
            Direction::Down => IVec2::new(1, 0),
            Direction::Left => IVec2::new(0, -1),
            Direction::Right => IVec2::new(0, 1),
            Direction::UpLeft => IVec2::new(-1, -1),
            Direction::UpRight => IVec2::new(-1, 1),
            Direction::DownLeft => IVec2::new(1, -1),
            Direction::DownRight => IVec2::new(1, 1),
        }
    }

    /// Sprite-sheet row of the walk cycle facing this way.
    ///
    /// Diagonals reuse the vertical rows since the sheet has only four.
    pub const fn facing_row(self) -> u32 {
        match self {
            Direction::Right => 0,
            Direction::Down | Direction::DownLeft | Direction::DownRight => 1,
            Direction::Up | Direction::UpLeft | Direction::UpRight => 2,
            Direction::Left => 3,
        }
    }
}
