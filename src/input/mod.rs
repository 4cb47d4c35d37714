//! Input mapping - key events to engine commands.
//!
//! The engine consumes four discrete commands; everything about how keys
//! arrive (polling, repeats, terminals without release events) stays out of
//! the engine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// Map a key code to a player command, if any.
///
/// Arrows and WASD both work; Up rotates.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Rotate),
        _ => None,
    }
}

/// True for the quit chords: q, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
