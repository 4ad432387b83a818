//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The session consumes decoded intents and tick signals and produces snapshots
//! for whatever front end drives it.

pub mod action;
pub mod config;
pub mod engine;
pub mod menu;
pub mod scores;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::{Difficulty, GameConfig, TickRates};
pub use engine::{GameEngine, StepResult};
pub use menu::{DifficultyMenu, MenuButton};
pub use scores::BestScores;
pub use session::{Control, GameSession, GameState, Snapshot};
pub use state::{BOARD_HEIGHT, BOARD_WIDTH, CollisionType, Position, Round, Snake};
