//! Key mapping from terminal events to player commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map keyboard input to player commands.
pub fn map_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Turning
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::TurnRight),

        // Walking
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveBackward),

        // Diagnostics overlay
        KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('I') => Some(Command::ToggleHud),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
