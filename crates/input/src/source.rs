//! Key sources: where decoded keys come from.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key;
use crate::types::Key;

/// A source of key presses.
pub trait KeySource {
    /// Wait up to `timeout` for the next key. Returns `Ok(None)` when nothing
    /// usable arrived in time.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;
}

/// Reads key presses from the terminal via crossterm.
///
/// Release and repeat events are dropped, as are non-key events such as
/// resizes and focus changes.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// A fixed queue of keys, for tests and demos.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<Option<Key>>,
}

impl ScriptedKeys {
    /// `None` entries stand for frames where no key arrives.
    pub fn new(keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<Key>> {
        Ok(self.keys.pop_front().flatten())
    }
}
