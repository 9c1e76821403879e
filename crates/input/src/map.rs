//! Key mapping from terminal events to game keys.

use crate::types::{Direction, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a [`Key`].
///
/// Letters are case-insensitive. Arrow keys and `WASD` both become
/// [`Key::Dir`], so movement and menu navigation share one path.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if is_interrupt(key) {
        return Some(Key::Interrupt);
    }

    match key.code {
        KeyCode::Up => Some(Key::Dir(Direction::Up)),
        KeyCode::Down => Some(Key::Dir(Direction::Down)),
        KeyCode::Left => Some(Key::Dir(Direction::Left)),
        KeyCode::Right => Some(Key::Dir(Direction::Right)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(map_char(c.to_ascii_lowercase())),
        _ => None,
    }
}

fn map_char(c: char) -> Key {
    match c {
        'w' => Key::Dir(Direction::Up),
        's' => Key::Dir(Direction::Down),
        'a' => Key::Dir(Direction::Left),
        'd' => Key::Dir(Direction::Right),
        '\r' | '\n' => Key::Enter,
        '0'..='9' => Key::Digit(c as u8 - b'0'),
        other => Key::Char(other),
    }
}

/// Ctrl+C arrives as a plain key event while the terminal is in raw mode.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
