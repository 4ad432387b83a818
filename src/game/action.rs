use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A decoded user action, independent of the input device that produced it.
///
/// Intents are edge-triggered: one per key press, never one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Restart,
    ChangeDifficulty,
    Quit,
}

impl Intent {
    /// The steering direction carried by a move intent, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}
