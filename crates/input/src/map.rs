//! Key mapping from terminal events to game inputs.

use crate::types::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game inputs.
pub fn handle_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameInput::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameInput::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameInput::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameInput::CursorDown),

        // Flip the card under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Select),

        // Game lifecycle
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameInput::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Reset),

        // Restart prompt
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(GameInput::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(GameInput::Decline),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
