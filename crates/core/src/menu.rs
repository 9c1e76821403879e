//! Main and pause menus.
//!
//! Menus only track the selection and translate [`MenuAction`]s into
//! [`MenuChoice`]s. Drawing lives in the terminal crate.

use crate::types::MenuAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Main,
    Pause,
}

/// What the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Continue,
    Resume,
    SaveGame,
    MainMenu,
    Exit,
}

impl MenuChoice {
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::NewGame => "New Game",
            MenuChoice::Continue => "Continue",
            MenuChoice::Resume => "Resume",
            MenuChoice::SaveGame => "Save Game",
            MenuChoice::MainMenu => "Main Menu",
            MenuChoice::Exit => "Exit",
        }
    }
}

const MAIN_ITEMS: [MenuChoice; 3] = [MenuChoice::NewGame, MenuChoice::Continue, MenuChoice::Exit];

const PAUSE_ITEMS: [MenuChoice; 4] = [
    MenuChoice::Resume,
    MenuChoice::SaveGame,
    MenuChoice::MainMenu,
    MenuChoice::Exit,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    kind: MenuKind,
    selected: usize,
    frame_count: u32,
}

impl Menu {
    pub fn main() -> Self {
        Self::new(MenuKind::Main)
    }

    pub fn pause() -> Self {
        Self::new(MenuKind::Pause)
    }

    fn new(kind: MenuKind) -> Self {
        Self {
            kind,
            selected: 0,
            frame_count: 0,
        }
    }

    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    pub fn items(&self) -> &'static [MenuChoice] {
        match self.kind {
            MenuKind::Main => &MAIN_ITEMS,
            MenuKind::Pause => &PAUSE_ITEMS,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Animation phase in `0..4`, advancing every 10 frames.
    pub fn animation_frame(&self) -> usize {
        ((self.frame_count / 10) % 4) as usize
    }

    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// Apply one menu action. Returns the chosen item on `Select`; `Back`
    /// picks the menu's escape item (Exit on the main menu, Resume when
    /// paused); `Quit` always picks Exit.
    pub fn handle(&mut self, action: MenuAction) -> Option<MenuChoice> {
        let len = self.items().len();
        match action {
            MenuAction::Up => {
                self.selected = (self.selected + len - 1) % len;
                None
            }
            MenuAction::Down => {
                self.selected = (self.selected + 1) % len;
                None
            }
            MenuAction::Select => Some(self.items()[self.selected]),
            MenuAction::Back => Some(match self.kind {
                MenuKind::Main => MenuChoice::Exit,
                MenuKind::Pause => MenuChoice::Resume,
            }),
            MenuAction::Quit => Some(MenuChoice::Exit),
        }
    }
}
