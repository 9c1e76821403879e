//! TerminalRenderer: flushes a screen buffer to a real terminal.
//!
//! Each frame is encoded into one reusable byte buffer and written with a
//! single `write_all` + `flush`. `Full` mode clears and repaints the screen
//! every frame; `Diff` mode keeps the previous frame and repaints only the
//! cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, ScreenBuffer};
use crate::style::StyleRegistry;

/// How frames are pushed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Clear the screen and repaint every row.
    #[default]
    Full,
    /// Repaint only changed runs against the previous frame.
    Diff,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: RenderMode,
    styles: StyleRegistry,
    last: Option<ScreenBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(mode: RenderMode, styles: StyleRegistry) -> Self {
        Self::new(io::stdout(), mode, styles)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, mode: RenderMode, styles: StyleRegistry) -> Self {
        Self {
            out,
            mode,
            styles,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Encode `fb` and write it out in one pass.
    pub fn render(&mut self, fb: &ScreenBuffer) -> Result<()> {
        self.buf.clear();
        match (self.mode, self.last.as_mut()) {
            (RenderMode::Diff, Some(prev))
                if prev.width() == fb.width() && prev.height() == fb.height() =>
            {
                encode_diff_into(prev, fb, &self.styles, &mut self.buf)?;
                // Same dimensions, so this reuses the existing allocation.
                prev.clone_from(fb);
            }
            (RenderMode::Diff, _) => {
                encode_full_into(fb, &self.styles, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
            (RenderMode::Full, _) => {
                encode_full_into(fb, &self.styles, &mut self.buf)?;
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// The screen is cleared and the cursor homed first. Every row starts in the
/// default style, changes style only where the run changes, and ends with a
/// reset plus `\r\n`.
pub fn encode_full_into(fb: &ScreenBuffer, styles: &StyleRegistry, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        for_each_style_run(fb.row(y), |start, run, style| {
            if start > 0 || style != CellStyle::default() {
                styles.apply_into(out, style)?;
            }
            print_run(out, run)
        })?;
        styles.reset_into(out)?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(
    prev: &ScreenBuffer,
    next: &ScreenBuffer,
    styles: &StyleRegistry,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        let run = &row[x as usize..(x + len) as usize];
        for_each_style_run(run, |_, cells, style| {
            if current_style != Some(style) {
                styles.apply_into(out, style)?;
                current_style = Some(style);
            }
            print_run(out, cells)
        })
    })?;

    if current_style.is_some() {
        styles.reset_into(out)?;
    }
    Ok(())
}

fn print_run(out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
    let mut utf8 = [0u8; 4];
    for cell in cells {
        out.extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
    }
    Ok(())
}

/// Split a row into maximal runs of equal style.
///
/// Calls `f(start, cells, style)` once per run, left to right.
pub fn for_each_style_run(
    row: &[Cell],
    mut f: impl FnMut(usize, &[Cell], CellStyle) -> Result<()>,
) -> Result<()> {
    let mut start = 0;
    while start < row.len() {
        let style = row[start].style;
        let mut end = start + 1;
        while end < row.len() && row[end].style == style {
            end += 1;
        }
        f(start, &row[start..end], style)?;
        start = end;
    }
    Ok(())
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ between
/// `prev` and `next`.
pub fn for_each_changed_run(
    prev: &ScreenBuffer,
    next: &ScreenBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let mut x = 0;
        while x < w {
            if a[x as usize] == b[x as usize] {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && a[x as usize] != b[x as usize] {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}

/// Raw mode plus alternate screen, restored on drop.
///
/// Holding the guard for the whole session means the terminal comes back on
/// every exit path, including `?` errors and unwinding panics.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { active: true };
        let mut buf = Vec::new();
        buf.queue(terminal::EnterAlternateScreen)?;
        buf.queue(cursor::Hide)?;
        buf.queue(terminal::DisableLineWrap)?;
        if let Err(e) = write_stdout(&buf) {
            guard.restore()?;
            return Err(e);
        }
        Ok(guard)
    }

    /// Leave the alternate screen and raw mode. Safe to call twice.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mut buf = Vec::new();
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
        buf.queue(terminal::EnableLineWrap)?;
        buf.queue(cursor::Show)?;
        buf.queue(terminal::LeaveAlternateScreen)?;
        let written = write_stdout(&buf);
        terminal::disable_raw_mode()?;
        written
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn write_stdout(buf: &[u8]) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(buf)?;
    stdout.flush()?;
    Ok(())
}
