//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the world simulation, the
//! terminal compositor and the input layer. Everything here is plain data,
//! so it can be used from any layer without pulling in terminal or I/O code.
//!
//! # Screen Layout
//!
//! The game renders into a fixed character grid:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 100 | Total grid width in columns |
//! | `SCREEN_HEIGHT` | 24 | Total grid height in rows |
//! | `UI_PANEL_WIDTH` | 32 | Width of the right-hand panel |
//! | `MAIN_AREA_WIDTH` | 68 | Width of the world viewport frame |
//! | `BORDER_INSET` | 2 | Offset from the frame edge to the first terrain cell |
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_ENERGY` | 150 | Energy cap, restored by sleeping |
//! | `TOOL_ENERGY_COST` | 5 | Energy spent per successful tool use |
//! | `AXE_DAMAGE` | 34 | Tree health removed per axe hit |
//! | `TREE_REGROW_MINUTES` | 60 | In-game minutes before a stump regrows |
//! | `CROP_STAGE_MINUTES` | 10 | Watered minutes per crop growth stage |
//!
//! # Examples
//!
//! ```
//! use farm_quest_types::{Direction, GameAction, Key, Tool};
//!
//! // Arrow keys and WASD both fold into a direction key.
//! let action = GameAction::from_key(Key::Dir(Direction::Left));
//! assert_eq!(action, Some(GameAction::Move(Direction::Left)));
//!
//! // Number keys select tool slots.
//! assert_eq!(GameAction::from_key(Key::Digit(2)), Some(GameAction::SelectTool(Tool::Hoe)));
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! ```

use serde::{Deserialize, Serialize};

/// Total screen width in columns.
pub const SCREEN_WIDTH: u16 = 100;

/// Total screen height in rows.
pub const SCREEN_HEIGHT: u16 = 24;

/// Width of the right-hand UI panel.
pub const UI_PANEL_WIDTH: u16 = 32;

/// Width of the main (world) area, border included.
pub const MAIN_AREA_WIDTH: u16 = SCREEN_WIDTH - UI_PANEL_WIDTH;

/// Distance from the outer frame to the first terrain cell.
pub const BORDER_INSET: i32 = 2;

/// Columns of world visible at once.
pub const VIEWPORT_WIDTH: i32 = MAIN_AREA_WIDTH as i32 - 2 * BORDER_INSET;

/// Rows of world visible at once.
pub const VIEWPORT_HEIGHT: i32 = SCREEN_HEIGHT as i32 - 2 * BORDER_INSET;

/// Default soft frame rate.
pub const DEFAULT_FPS: u32 = 30;

pub const MAX_ENERGY: u32 = 150;
pub const START_MONEY: u32 = 100;
pub const MOVE_ENERGY_COST: u32 = 1;
pub const TOOL_ENERGY_COST: u32 = 5;

pub const TREE_MAX_HEALTH: u8 = 100;
pub const AXE_DAMAGE: u8 = 34;
pub const TREE_REGROW_MINUTES: u32 = 60;

/// Minutes a watered crop spends in each growth stage.
pub const CROP_STAGE_MINUTES: u32 = 10;

/// Wood dropped by a felled tree, inclusive range.
pub const WOOD_YIELD: (u32, u32) = (2, 4);

/// Wheat gathered from a ready crop, inclusive range.
pub const HARVEST_YIELD: (u32, u32) = (2, 4);

/// Seeds bought per shop visit when there is nothing to sell.
pub const SEED_PACK_SIZE: u32 = 5;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Time of day a new game starts and every morning begins (6:00 AM).
pub const DAY_START_MINUTES: u32 = 6 * MINUTES_PER_HOUR;

/// Default lifetime of a status message in frames.
pub const STATUS_TTL_FRAMES: u32 = 30;

/// Lifetime used for notable events (sleeping, trading, felling a tree).
pub const STATUS_LONG_TTL_FRAMES: u32 = 60;

/// Lifetime of the welcome banner shown on a new game.
pub const WELCOME_TTL_FRAMES: u32 = 120;

/// Player spawn tile.
pub const START_POS: (i32, i32) = (50, 10);

pub const MINIMAP_WIDTH: i32 = 12;
pub const MINIMAP_HEIGHT: i32 = 6;

pub const GAME_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants_are_consistent() {
        assert_eq!(MAIN_AREA_WIDTH, 68);
        assert_eq!(VIEWPORT_WIDTH, 64);
        assert_eq!(VIEWPORT_HEIGHT, 20);
        assert_eq!(MAIN_AREA_WIDTH + UI_PANEL_WIDTH, SCREEN_WIDTH);
    }

    #[test]
    fn three_axe_hits_fell_a_tree() {
        let mut health = TREE_MAX_HEALTH;
        for _ in 0..3 {
            health = health.saturating_sub(AXE_DAMAGE);
        }
        assert_eq!(health, 0);
    }

    #[test]
    fn ctrl_c_quits_from_gameplay_and_menus() {
        assert_eq!(GameAction::from_key(Key::Interrupt), Some(GameAction::Quit));
        assert_eq!(MenuAction::from_key(Key::Interrupt), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_key(Key::Escape), Some(MenuAction::Back));
    }
}

/// Cardinal facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

impl Direction {
    /// Tile delta for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Tools the player can equip.
///
/// Slots map to the number keys `1`-`4`; `5` unequips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tool {
    Axe,
    Hoe,
    Seeds,
    WateringCan,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Axe, Tool::Hoe, Tool::Seeds, Tool::WateringCan];

    /// Number key that selects this tool.
    pub fn slot(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn index(self) -> usize {
        match self {
            Tool::Axe => 0,
            Tool::Hoe => 1,
            Tool::Seeds => 2,
            Tool::WateringCan => 3,
        }
    }

    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Tool::Axe),
            2 => Some(Tool::Hoe),
            3 => Some(Tool::Seeds),
            4 => Some(Tool::WateringCan),
            _ => None,
        }
    }

    /// Display name used in the tool list.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Axe => "Axe",
            Tool::Hoe => "Hoe",
            Tool::Seeds => "Seeds",
            Tool::WateringCan => "Watering Can",
        }
    }

    /// Lowercase name used in hints and messages.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Axe => "axe",
            Tool::Hoe => "hoe",
            Tool::Seeds => "seeds",
            Tool::WateringCan => "watering can",
        }
    }
}

/// Inventory item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Wood,
    Stone,
    Seeds,
    Wheat,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [ItemKind::Wood, ItemKind::Stone, ItemKind::Seeds, ItemKind::Wheat];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Wood => "wood",
            ItemKind::Stone => "stone",
            ItemKind::Seeds => "seeds",
            ItemKind::Wheat => "wheat",
        }
    }

    /// Shop price per unit.
    pub fn base_price(self) -> u32 {
        match self {
            ItemKind::Wood => 5,
            ItemKind::Stone => 3,
            ItemKind::Seeds => 10,
            ItemKind::Wheat => 15,
        }
    }

    /// Whether the shop buys this item from the player.
    pub fn is_sellable(self) -> bool {
        !matches!(self, ItemKind::Seeds)
    }
}

/// Abstract tone of a status message.
///
/// The world only picks a tone; the terminal layer decides which colors it
/// maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Water,
}

/// A decoded key press.
///
/// Arrow keys and `WASD` both arrive as [`Key::Dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Dir(Direction),
    Digit(u8),
    Space,
    Enter,
    Escape,
    Char(char),
    /// Ctrl+C.
    Interrupt,
}

/// Actions available while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    Move(Direction),
    SelectTool(Tool),
    Unequip,
    UseTool,
    Interact,
    ToggleMinimap,
    Pause,
    Quit,
}

impl GameAction {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Dir(dir) => Some(GameAction::Move(dir)),
            Key::Digit(5) => Some(GameAction::Unequip),
            Key::Digit(d) => Tool::from_slot(d).map(GameAction::SelectTool),
            Key::Space => Some(GameAction::UseTool),
            Key::Char('f') => Some(GameAction::Interact),
            Key::Char('m') => Some(GameAction::ToggleMinimap),
            Key::Escape => Some(GameAction::Pause),
            Key::Char('q') | Key::Interrupt => Some(GameAction::Quit),
            _ => None,
        }
    }
}

/// Actions available on menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    Back,
    /// Ctrl+C: leave the game from any menu.
    Quit,
}

impl MenuAction {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Dir(Direction::Up) => Some(MenuAction::Up),
            Key::Dir(Direction::Down) => Some(MenuAction::Down),
            Key::Enter | Key::Space => Some(MenuAction::Select),
            Key::Escape => Some(MenuAction::Back),
            Key::Interrupt => Some(MenuAction::Quit),
            _ => None,
        }
    }
}
