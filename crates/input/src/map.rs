//! Key mapping from terminal events to pad button masks.

use crate::types::{BUTTON_DOWN, BUTTON_LEFT, BUTTON_RIGHT, BUTTON_UP};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to a button mask.
///
/// Arrows plus WASD and vi-style HJKL. A key press stands in for one pad
/// poll, so the mask always carries at most one button; unmapped keys are a
/// no-button poll.
pub fn buttons_from_key(key: KeyEvent) -> u8 {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k')
        | KeyCode::Char('K') => BUTTON_UP,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j')
        | KeyCode::Char('J') => BUTTON_DOWN,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h')
        | KeyCode::Char('H') => BUTTON_LEFT,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l')
        | KeyCode::Char('L') => BUTTON_RIGHT,
        _ => 0,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key should reset the level.
pub fn should_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}
