//! Terminal input module.
//!
//! Maps `crossterm` key events into the game's [`Key`](types::Key) vocabulary
//! and provides [`KeySource`] implementations the main loop can poll with a
//! frame-budget timeout.

pub mod map;
pub mod source;

pub use farm_quest_types as types;

pub use map::{is_interrupt, map_key};
pub use source::{CrosstermKeys, KeySource, ScriptedKeys};
