use serde::{Deserialize, Serialize};

use super::action::Direction;

/// Number of columns on the board (a 720px window at 20px per cell)
pub const BOARD_WIDTH: i32 = 36;
/// Number of rows on the board (a 480px window at 20px per cell)
pub const BOARD_HEIGHT: i32 = 24;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies on the board
    pub fn is_in_bounds(&self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Steer the snake. A reversal onto the current direction's opposite is
    /// rejected; returns whether the direction was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Check if `pos` will still be covered by the body once the snake moves.
    ///
    /// The tail is excluded since it is vacated on the same tick the head
    /// advances.
    pub fn occupies_after_move(&self, pos: Position) -> bool {
        let staying = self.body.len().saturating_sub(1);
        self.body[..staying].contains(&pos)
    }

    /// Check if any segment covers `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake in current direction, growing if should_grow is true
    pub fn move_snake(&mut self, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Everything that belongs to one play-through, rebuilt on every reset
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl Round {
    pub fn new(snake: Snake, food: Position) -> Self {
        Self {
            snake,
            food,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }
}
