use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Intent;

/// Translates terminal key presses into game intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Decode a key event. Releases and repeats produce nothing, so each
    /// physical press yields at most one intent.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Intent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        let intent = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Intent::MoveUp,
            KeyCode::Down => Intent::MoveDown,
            KeyCode::Left => Intent::MoveLeft,
            KeyCode::Right => Intent::MoveRight,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Intent::MoveUp,
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::MoveDown,
            KeyCode::Char('a') | KeyCode::Char('A') => Intent::MoveLeft,
            KeyCode::Char('d') | KeyCode::Char('D') => Intent::MoveRight,

            // Screens
            KeyCode::Enter => Intent::Confirm,
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
            KeyCode::Esc => Intent::ChangeDifficulty,
            KeyCode::Char('q') | KeyCode::Char('Q') => Intent::Quit,

            _ => return None,
        };

        Some(intent)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
