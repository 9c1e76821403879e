//! Style registry: turns [`CellStyle`] tokens into terminal escape sequences.
//!
//! Styling can be switched off entirely (`NO_COLOR`), in which case only
//! glyphs and row breaks reach the terminal.

use anyhow::Result;
use crossterm::{
    style::{self, Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use farm_quest_types::Tone;

use crate::fb::{CellStyle, Color};

/// Named styles shared by the views.
pub mod palette {
    use crate::fb::{CellStyle, Color};

    pub const BORDER: CellStyle = CellStyle::fg(Color::Yellow);
    pub const TITLE: CellStyle = CellStyle::fg(Color::BrightGreen);
    pub const MUTED: CellStyle = CellStyle::fg(Color::BrightBlack);
    pub const TEXT: CellStyle = CellStyle::fg(Color::BrightWhite);
    pub const HIGHLIGHT: CellStyle = CellStyle::fg(Color::BrightYellow);
    pub const TIME: CellStyle = CellStyle::fg(Color::BrightGreen);
    pub const MONEY: CellStyle = CellStyle::fg(Color::BrightYellow);
    pub const ENERGY: CellStyle = CellStyle::fg(Color::BrightCyan);

    pub const GRASS_FG: Color = Color::rgb(1, 100, 41);
    pub const GRASS_BG: Color = Color::rgb(150, 210, 100);
    pub const WATER_BG: Color = Color::rgb(152, 209, 255);
    pub const WOOD: Color = Color::rgb(112, 69, 33);

    pub const PLAYER: CellStyle = CellStyle::fg(Color::rgb(255, 0, 0));
    pub const MINIMAP_BG: CellStyle = CellStyle::colors(Color::Default, Color::Black);
}

/// Foreground style for a status message tone.
pub fn tone_style(tone: Tone) -> CellStyle {
    let fg = match tone {
        Tone::Info => Color::BrightWhite,
        Tone::Success => Color::BrightGreen,
        Tone::Warning => Color::BrightYellow,
        Tone::Error => Color::BrightRed,
        Tone::Water => Color::BrightBlue,
    };
    CellStyle::fg(fg)
}

/// Writes style changes into an output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRegistry {
    enabled: bool,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StyleRegistry {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A registry that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Switch the terminal to `style`. Attributes are reset first so bold and
    /// dim never leak from the previous run.
    pub fn apply_into(&self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_crossterm(style.fg)))?;
        out.queue(SetBackgroundColor(to_crossterm(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }

    /// Return the terminal to its default style.
    pub fn reset_into(&self, out: &mut Vec<u8>) -> Result<()> {
        if self.enabled {
            out.queue(style::ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

pub fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
        Color::Rgb(rgb) => style::Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
    }
}
