use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::action::Direction;
use super::state::{BOARD_HEIGHT, BOARD_WIDTH, Position, Snake};

/// Difficulty levels offered by the menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Simulation speed for each difficulty, in ticks per second
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickRates {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl TickRates {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            easy: 5,
            medium: 10,
            hard: 15,
        }
    }
}

/// Configuration for the game
///
/// The board size is fixed; everything else about a fresh round can be
/// tuned from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cell the snake's head starts on
    pub start: Position,
    /// Direction the snake heads in after a reset
    pub start_direction: Direction,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Ticks per second for each difficulty
    pub tick_rates: TickRates,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start: Position::new(20, 20),
            start_direction: Direction::Right,
            initial_snake_length: 1,
            tick_rates: TickRates::default(),
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Validate configuration parameters
    ///
    /// The starting snake must fit on the board, and every difficulty needs
    /// a positive tick rate.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        let cells = (BOARD_WIDTH * BOARD_HEIGHT) as usize;
        if self.initial_snake_length >= cells {
            return Err(format!(
                "initial_snake_length ({}) leaves no room for food on a {}x{} board",
                self.initial_snake_length, BOARD_WIDTH, BOARD_HEIGHT
            ));
        }

        let snake = Snake::new(
            self.start,
            self.start_direction,
            self.initial_snake_length,
        );
        if let Some(pos) = snake.body.iter().find(|pos| !pos.is_in_bounds()) {
            return Err(format!(
                "starting snake leaves the board at ({}, {})",
                pos.x, pos.y
            ));
        }

        for difficulty in Difficulty::ALL {
            if self.tick_rates.for_difficulty(difficulty) == 0 {
                return Err(format!(
                    "tick rate for {} must be positive",
                    difficulty.label()
                ));
            }
        }

        Ok(())
    }
}
