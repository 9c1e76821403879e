//! Main and pause menu screens.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use farm_quest_core::{Menu, MenuChoice, MenuKind};
use farm_quest_types::GAME_VERSION;

use crate::fb::{CellStyle, Color, ScreenBuffer};
use crate::style::palette;

const FARM_QUEST_TITLE: [&str; 6] = [
    "███████╗ █████╗ ██████╗ ███╗   ███╗     ██████╗ ██╗   ██╗███████╗███████╗████████╗",
    "██╔════╝██╔══██╗██╔══██╗████╗ ████║    ██╔═══██╗██║   ██║██╔════╝██╔════╝╚══██╔══╝",
    "█████╗  ███████║██████╔╝██╔████╔██║    ██║   ██║██║   ██║█████╗  ███████╗   ██║   ",
    "██╔══╝  ██╔══██║██╔══██╗██║╚██╔╝██║    ██║  ███║██║   ██║██╔══╝  ╚════██║   ██║   ",
    "██║     ██║  ██║██║  ██║██║ ╚═╝ ██║    ╚███████╝╚██████╔╝███████╗███████║   ██║   ",
    "╚═╝     ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝     ╚═════██ ╚═════╝ ╚══════╝╚══════╝   ╚═╝   ",
];

const PAUSED_TITLE: [&str; 6] = [
    "██████╗  █████╗ ██╗   ██╗███████╗███████╗██████╗ ",
    "██╔══██╗██╔══██╗██║   ██║██╔════╝██╔════╝██╔══██╗",
    "██████╔╝███████║██║   ██║███████╗█████╗  ██║  ██║",
    "██╔═══╝ ██╔══██║██║   ██║╚════██║██╔══╝  ██║  ██║",
    "██║     ██║  ██║╚██████╔╝███████║███████╗██████╔╝",
    "╚═╝     ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚══════╝╚═════╝ ",
];

const TITLE_COLORS: [Color; 4] = [
    Color::BrightCyan,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightGreen,
];

const SELECTORS: [&str; 4] = ["→  ", " → ", "  →", " → "];

const CONTROLS: &str = "↑/W: Up | ↓/S: Down | Enter/Space: Select | Esc: Quit";

const TITLE_ROW: i32 = 3;

/// Bytes for one menu line. The widest is a selected `Save Game` with its
/// arrows at 19 bytes, so writes never truncate.
const TEXT_CAP: usize = 64;

fn item_color(choice: MenuChoice) -> Color {
    match choice {
        MenuChoice::NewGame | MenuChoice::Resume => Color::BrightGreen,
        MenuChoice::MainMenu => Color::BrightMagenta,
        MenuChoice::Exit => Color::BrightRed,
        MenuChoice::Continue | MenuChoice::SaveGame => Color::BrightWhite,
    }
}

fn width_of(text: &str) -> i32 {
    text.chars().count() as i32
}

/// Renders a [`Menu`] full screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn new() -> Self {
        Self
    }

    pub fn render_into(&self, menu: &Menu, fb: &mut ScreenBuffer) {
        fb.clear();
        let (w, h) = (fb.width() as i32, fb.height() as i32);
        self.draw_fancy_border(fb);

        let frame = menu.animation_frame();
        let title: &[&str] = match menu.kind() {
            MenuKind::Main => &FARM_QUEST_TITLE,
            MenuKind::Pause => &PAUSED_TITLE,
        };
        let title_style = CellStyle::fg(TITLE_COLORS[frame]);
        for (i, line) in title.iter().enumerate() {
            let x = (w - width_of(line)) / 2;
            if x >= 0 {
                fb.draw_string(x, TITLE_ROW + i as i32, line, title_style);
            }
        }

        let items_row = TITLE_ROW + title.len() as i32 + 3;
        let mut text = ArrayString::<TEXT_CAP>::new();
        for (i, choice) in menu.items().iter().enumerate() {
            text.clear();
            let mut style = CellStyle::fg(item_color(*choice));
            if i == menu.selected() {
                let _ = write!(text, "{}{}  ←", SELECTORS[frame], choice.label());
                style = style.bold();
            } else {
                let _ = write!(text, "   {}   ", choice.label());
            }
            let x = (w - width_of(&text)) / 2;
            fb.draw_string(x, items_row + 2 * i as i32, &text, style);
        }

        fb.draw_string((w - width_of(CONTROLS)) / 2, h - 4, CONTROLS, palette::MUTED);

        text.clear();
        let _ = write!(text, "V{}", GAME_VERSION);
        fb.draw_string(w - width_of(&text) - 2, h - 2, &text, palette::MUTED);
    }

    fn draw_fancy_border(&self, fb: &mut ScreenBuffer) {
        let style = CellStyle::fg(Color::BrightCyan);
        let (right, bottom) = (fb.width() as i32 - 1, fb.height() as i32 - 1);

        for x in 1..right {
            let ch = if x % 2 == 0 { '═' } else { '╌' };
            fb.draw_char(x, 0, ch, style);
            fb.draw_char(x, bottom, ch, style);
        }
        for y in 1..bottom {
            let ch = if y % 2 == 0 { '║' } else { '│' };
            fb.draw_char(0, y, ch, style);
            fb.draw_char(right, y, ch, style);
        }
        fb.draw_char(0, 0, '╔', style);
        fb.draw_char(right, 0, '╗', style);
        fb.draw_char(0, bottom, '╚', style);
        fb.draw_char(right, bottom, '╝', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_quest_types::MenuAction;

    fn row_text(fb: &ScreenBuffer, y: u16) -> String {
        fb.row(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn main_menu_layout() {
        let mut fb = ScreenBuffer::default();
        MenuView::new().render_into(&Menu::main(), &mut fb);

        assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
        assert_eq!(fb.get(1, 0).unwrap().ch, '╌');
        assert_eq!(fb.get(2, 0).unwrap().ch, '═');
        // Title occupies rows 3-8, items start three rows below.
        assert!(row_text(&fb, 3).contains("███████╗"));
        assert!(row_text(&fb, 12).contains("→  New Game  ←"));
        assert!(row_text(&fb, 14).contains("   Continue   "));
        assert!(row_text(&fb, 16).contains("Exit"));
        assert!(row_text(&fb, 20).contains(CONTROLS));
        assert!(row_text(&fb, 22).contains(&format!("V{}", GAME_VERSION)));
    }

    #[test]
    fn selected_item_is_bold_and_animated() {
        let mut menu = Menu::pause();
        menu.handle(MenuAction::Down);
        for _ in 0..10 {
            menu.tick();
        }
        let mut fb = ScreenBuffer::default();
        MenuView::new().render_into(&menu, &mut fb);

        let row = row_text(&fb, 14);
        assert!(row.contains(" → Save Game  ←"), "{row:?}");
        let x = row.chars().position(|c| c == '→').unwrap() as u16;
        assert!(fb.get(x, 14).unwrap().style.bold);

        let title_cell = fb.get(30, 3).unwrap();
        assert_eq!(title_cell.style.fg, Color::BrightBlue);
    }
}
