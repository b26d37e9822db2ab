//! Key mapping from terminal events to game events.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game events.
pub fn handle_key_event(key: KeyEvent) -> Option<GameEvent> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameEvent::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameEvent::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameEvent::Rotate),

        // Pause / resume
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameEvent::Pause),

        // Quit
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),

        _ => None,
    }
}

/// Check if key should quit immediately, regardless of game phase.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
