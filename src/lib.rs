//! Grid Snake - a terminal snake game with a difficulty menu
//!
//! This library provides:
//! - Core game logic and the menu/playing/lost state machine (game module)
//! - Keyboard decoding into game intents (input module)
//! - TUI rendering of game snapshots (render module)
//! - The interactive terminal front end (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
