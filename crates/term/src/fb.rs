//! Screen buffer and style types for terminal rendering.
//!
//! The buffer is a fixed grid of `(glyph, style)` cells. Every drawing
//! primitive takes signed coordinates and clips silently, so callers can draw
//! partially off-screen shapes without bounds checks of their own.

use farm_quest_types::{MAIN_AREA_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A terminal color: the terminal default, one of the 16 named ANSI colors,
/// or true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(Rgb),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: Color::Default,
            bold: false,
            dim: false,
        }
    }

    pub const fn colors(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Fixed-size grid of styled character cells.
#[derive(Debug, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Clone for ScreenBuffer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses the existing cell storage when the sizes match.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, or an empty slice past the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Reset every cell to a blank in the default style.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Draw `text` left to right from `(x, y)`, one cell per `char`.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width as i32 {
                break;
            }
            self.draw_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Horizontal line from `x0` to `x1`, both inclusive.
    pub fn draw_horizontal_line(&mut self, y: i32, x0: i32, x1: i32, ch: char, style: CellStyle) {
        for x in x0..=x1 {
            self.draw_char(x, y, ch, style);
        }
    }

    /// Vertical line from `y0` to `y1`, both inclusive.
    pub fn draw_vertical_line(&mut self, x: i32, y0: i32, y1: i32, ch: char, style: CellStyle) {
        for y in y0..=y1 {
            self.draw_char(x, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.draw_char(x + dx, y + dy, ch, style);
            }
        }
    }
}

/// Whether `(x, y)` lies in the world viewport frame.
pub fn is_in_main_area(x: i32, y: i32) -> bool {
    (0..MAIN_AREA_WIDTH as i32).contains(&x) && (0..SCREEN_HEIGHT as i32).contains(&y)
}

/// Whether `(x, y)` lies in the side panel.
pub fn is_in_ui_panel(x: i32, y: i32) -> bool {
    (MAIN_AREA_WIDTH as i32..SCREEN_WIDTH as i32).contains(&x)
        && (0..SCREEN_HEIGHT as i32).contains(&y)
}
