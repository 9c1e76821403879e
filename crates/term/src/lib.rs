//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead draws into a fixed
//! character-cell buffer that is flushed to the terminal once per frame.
//!
//! - [`fb`]: the screen buffer and its clipping draw primitives
//! - [`style`]: style tokens to escape sequences, with a plain-text fallback
//! - [`renderer`]: full and diff frame encoders plus the terminal guard
//! - [`pacer`]: soft frame-rate limiting
//! - [`camera`]: world-to-viewport projection
//! - [`view`] / [`menu_view`]: pure draw passes for the playing and menu screens

pub mod camera;
pub mod fb;
pub mod menu_view;
pub mod pacer;
pub mod renderer;
pub mod style;
pub mod view;

pub use farm_quest_core as core;
pub use farm_quest_types as types;

pub use camera::{camera_offset, CameraOffset};
pub use fb::{is_in_main_area, is_in_ui_panel, Cell, CellStyle, Color, Rgb, ScreenBuffer};
pub use menu_view::MenuView;
pub use pacer::FramePacer;
pub use renderer::{
    encode_diff_into, encode_full_into, RenderMode, TerminalGuard, TerminalRenderer,
};
pub use style::StyleRegistry;
pub use view::FarmView;
