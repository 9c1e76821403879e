//! FarmView: maps the world into the screen buffer.
//!
//! This module is pure (no I/O). Passes run in a fixed order and later passes
//! overwrite earlier ones: border, title, terrain, objects, player, minimap,
//! status line, side panel. Formatting goes through fixed-capacity strings so
//! a frame can be drawn without touching the heap.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use farm_quest_core::{CropStage, Terrain, World, WorldObject};
use farm_quest_types::{
    Direction, ItemKind, Tool, BORDER_INSET, MAIN_AREA_WIDTH, MINIMAP_HEIGHT, MINIMAP_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_TTL_FRAMES, UI_PANEL_WIDTH, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};

use crate::camera::{camera_offset, CameraOffset};
use crate::fb::{is_in_main_area, is_in_ui_panel, CellStyle, Color, ScreenBuffer};
use crate::style::{palette, tone_style};

const TITLE: &str = "Home Village";

const MAIN_W: i32 = MAIN_AREA_WIDTH as i32;
const SCREEN_W: i32 = SCREEN_WIDTH as i32;
const SCREEN_H: i32 = SCREEN_HEIGHT as i32;

/// Row of the status line.
pub const STATUS_ROW: i32 = SCREEN_H - 2;

/// Top-left cell of the minimap contents.
pub const MINIMAP_ORIGIN: (i32, i32) = (3, 3);

/// Column shared by the viewport frame and the panel frame.
const PANEL_X: i32 = MAIN_W - 1;
const PANEL_TEXT_X: i32 = PANEL_X + 2;

/// Panel sections: title and header row.
const STATUS_SECTION: (&str, i32) = ("Status", 3);
const TOOLS_SECTION: (&str, i32) = ("Tools", 8);
const INVENTORY_SECTION: (&str, i32) = ("Inventory", 13);
const INFO_SECTION: (&str, i32) = ("Info", 20);
const INVENTORY_ROWS: usize = 4;

/// Formatting capacities, in bytes. Each holds the longest text its pass can
/// produce, so writes never truncate:
/// - line: `Position: (-2147483648, -2147483648)` is 36
/// - header: `─ Info ` plus 22 `─` (3 bytes each) is 75
/// - hints: `SPACE: Use watering can | 3: Plant seeds | M: Map | Q: Quit` is 59
const LINE_CAP: usize = 64;
const HEADER_CAP: usize = 128;
const HINTS_CAP: usize = 160;

/// Glyph and style for a terrain tile.
pub fn terrain_cell(terrain: Terrain) -> (char, CellStyle) {
    use palette::{GRASS_BG, GRASS_FG, WATER_BG, WOOD};
    let cell = |ch, fg, bg| (ch, CellStyle::colors(fg, bg));
    match terrain {
        Terrain::Grass => cell('·', GRASS_FG, GRASS_BG),
        Terrain::Dirt => cell('░', Color::rgb(176, 112, 66), Color::rgb(120, 91, 60)),
        Terrain::Water => cell('~', Color::rgb(45, 82, 233), WATER_BG),
        Terrain::WaterLily => cell('*', Color::rgb(254, 147, 147), WATER_BG),
        Terrain::HouseWall => cell('█', WOOD, GRASS_BG),
        Terrain::HouseDoor => cell('▢', GRASS_FG, GRASS_BG),
        Terrain::HouseWindow => cell('◆', GRASS_FG, GRASS_BG),
        Terrain::ShopWall => cell('█', Color::rgb(140, 69, 33), GRASS_BG),
        Terrain::Tree => cell('♣', GRASS_FG, GRASS_BG),
        Terrain::Seeds => cell(',', GRASS_FG, GRASS_BG),
        Terrain::Path => cell('≡', Color::rgb(120, 120, 120), Color::rgb(160, 160, 160)),
        Terrain::Fence => cell('+', Color::rgb(46, 29, 17), GRASS_BG),
        Terrain::Mountain => cell('█', Color::rgb(100, 100, 100), GRASS_BG),
        Terrain::Portal => cell('꩜', Color::rgb(255, 0, 255), GRASS_BG),
        Terrain::MineEntrance => cell('█', Color::rgb(60, 60, 60), Color::rgb(60, 60, 60)),
    }
}

/// Glyph and style for a world object.
pub fn object_cell(object: &WorldObject) -> (char, CellStyle) {
    use palette::{GRASS_BG, GRASS_FG, WOOD};
    const SOIL: Color = Color::rgb(120, 91, 60);
    match object {
        WorldObject::Tree { .. } => ('♣', CellStyle::colors(GRASS_FG, GRASS_BG)),
        WorldObject::Stump { .. } => ('╥', CellStyle::colors(WOOD, GRASS_BG)),
        WorldObject::FarmPlot => ('░', CellStyle::colors(Color::rgb(176, 112, 66), SOIL)),
        WorldObject::Crop(crop) => {
            let (ch, fg) = match crop.stage {
                CropStage::Seeds => ('·', Color::BrightGreen),
                CropStage::Sprout => ('∴', Color::BrightGreen),
                CropStage::Growing => ('ω', Color::Green),
                CropStage::Ready => ('Ψ', Color::BrightYellow),
            };
            let style = CellStyle::colors(fg, SOIL);
            (ch, if crop.watered { style } else { style.dim() })
        }
    }
}

pub fn player_glyph(facing: Direction) -> char {
    match facing {
        Direction::Up => '▲',
        Direction::Right => '▶',
        Direction::Down => '▼',
        Direction::Left => '◀',
    }
}

fn minimap_cell(terrain: Terrain) -> (char, CellStyle) {
    match terrain {
        Terrain::HouseWall => ('■', CellStyle::fg(Color::Red)),
        Terrain::Water => ('≈', CellStyle::fg(Color::BrightBlue)),
        Terrain::Tree => ('♣', CellStyle::fg(Color::Green)),
        Terrain::Path => ('=', CellStyle::fg(Color::Yellow)),
        Terrain::Dirt => ('#', CellStyle::fg(Color::Yellow)),
        _ => ('·', palette::MUTED),
    }
}

/// Whether a screen cell belongs to the terrain viewport: the main area
/// shrunk by the border inset on every side.
fn in_viewport(sx: i32, sy: i32) -> bool {
    is_in_main_area(sx - BORDER_INSET, sy - BORDER_INSET)
        && is_in_main_area(sx + BORDER_INSET, sy + BORDER_INSET)
}

/// Write panel text from `PANEL_TEXT_X`, stopping before the right frame.
fn draw_panel_text(fb: &mut ScreenBuffer, y: i32, text: &str, style: CellStyle) {
    for (x, ch) in (PANEL_TEXT_X..SCREEN_W - 1).zip(text.chars()) {
        if !is_in_ui_panel(x, y) {
            return;
        }
        fb.draw_char(x, y, ch, style);
    }
}

/// Renders the playing screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct FarmView;

impl FarmView {
    pub fn new() -> Self {
        Self
    }

    /// Clear `fb` and draw one full frame of `world`.
    pub fn render_into(&self, world: &World, fb: &mut ScreenBuffer) {
        fb.clear();
        self.draw_border(fb);
        self.draw_title(fb);
        let cam = self.camera(world);
        self.draw_terrain(world, cam, fb);
        self.draw_objects(world, cam, fb);
        self.draw_player(world, cam, fb);
        if world.show_minimap() {
            self.draw_minimap(world, fb);
        }
        self.draw_status_line(world, fb);
        self.draw_panel(world, fb);
    }

    pub fn camera(&self, world: &World) -> CameraOffset {
        let map = world.map();
        camera_offset(
            world.player().pos,
            map.width(),
            map.height(),
            VIEWPORT_WIDTH,
            VIEWPORT_HEIGHT,
        )
    }

    fn draw_border(&self, fb: &mut ScreenBuffer) {
        let style = palette::BORDER;
        let bottom = SCREEN_H - 1;
        let right = SCREEN_W - 1;

        fb.draw_horizontal_line(0, 0, right, '═', style);
        fb.draw_horizontal_line(bottom, 0, right, '═', style);
        for x in [0, PANEL_X, right] {
            fb.draw_vertical_line(x, 1, bottom - 1, '║', style);
        }

        fb.draw_char(0, 0, '╔', style);
        fb.draw_char(right, 0, '╗', style);
        fb.draw_char(0, bottom, '╚', style);
        fb.draw_char(right, bottom, '╝', style);
        fb.draw_char(PANEL_X, 0, '╦', style);
        fb.draw_char(PANEL_X, bottom, '╩', style);
    }

    fn draw_title(&self, fb: &mut ScreenBuffer) {
        let x = (MAIN_W - TITLE.len() as i32) / 2;
        fb.draw_string(x, 1, TITLE, palette::TITLE);
    }

    /// Map tiles that land inside the viewport.
    fn draw_terrain(&self, world: &World, cam: CameraOffset, fb: &mut ScreenBuffer) {
        let map = world.map();
        let (ox, oy) = cam.origin();
        let x_end = map.width().min(ox + VIEWPORT_WIDTH);
        let y_end = map.height().min(oy + VIEWPORT_HEIGHT);

        for y in oy.max(0)..y_end {
            for x in ox.max(0)..x_end {
                let (sx, sy) = screen_pos(cam, (x, y));
                if !in_viewport(sx, sy) {
                    continue;
                }
                if let Some(terrain) = map.get(x, y) {
                    let (ch, style) = terrain_cell(terrain);
                    fb.draw_char(sx, sy, ch, style);
                }
            }
        }
    }

    fn draw_objects(&self, world: &World, cam: CameraOffset, fb: &mut ScreenBuffer) {
        for (&pos, object) in world.objects() {
            let (sx, sy) = screen_pos(cam, pos);
            if in_viewport(sx, sy) {
                let (ch, style) = object_cell(object);
                fb.draw_char(sx, sy, ch, style);
            }
        }
    }

    fn draw_player(&self, world: &World, cam: CameraOffset, fb: &mut ScreenBuffer) {
        let player = world.player();
        let (sx, sy) = screen_pos(cam, player.pos);
        if in_viewport(sx, sy) {
            fb.draw_char(sx, sy, player_glyph(player.facing), palette::PLAYER);
        }
    }

    fn draw_minimap(&self, world: &World, fb: &mut ScreenBuffer) {
        let (mx, my) = MINIMAP_ORIGIN;
        let (w, h) = (MINIMAP_WIDTH, MINIMAP_HEIGHT);
        let frame = palette::MUTED;

        fb.fill_rect(mx - 1, my - 1, w + 2, h + 2, ' ', palette::MINIMAP_BG);
        fb.draw_horizontal_line(my - 1, mx, mx + w - 1, '═', frame);
        fb.draw_horizontal_line(my + h, mx, mx + w - 1, '═', frame);
        fb.draw_vertical_line(mx - 1, my, my + h - 1, '║', frame);
        fb.draw_vertical_line(mx + w, my, my + h - 1, '║', frame);
        fb.draw_char(mx - 1, my - 1, '╔', frame);
        fb.draw_char(mx + w, my - 1, '╗', frame);
        fb.draw_char(mx - 1, my + h, '╚', frame);
        fb.draw_char(mx + w, my + h, '╝', frame);

        let map = world.map();
        for y in 0..h {
            for x in 0..w {
                let map_x = x * map.width() / w;
                let map_y = y * map.height() / h;
                if let Some(terrain) = map.get(map_x, map_y) {
                    let (ch, style) = minimap_cell(terrain);
                    fb.draw_char(mx + x, my + y, ch, style);
                }
            }
        }

        let (px, py) = world.player().pos;
        let marker_x = mx + px * w / map.width().max(1);
        let marker_y = my + py * h / map.height().max(1);
        if (mx..mx + w).contains(&marker_x) && (my..my + h).contains(&marker_y) {
            fb.draw_char(marker_x, marker_y, '☺', CellStyle::fg(Color::BrightCyan));
        }

        let label = "Mini Map (M)";
        let label_x = mx + (w - label.chars().count() as i32) / 2;
        fb.draw_string(label_x, my - 2, label, frame);
    }

    /// Message on the left, key hints on the right; if both do not fit, the
    /// message wins for the first part of its lifetime.
    fn draw_status_line(&self, world: &World, fb: &mut ScreenBuffer) {
        let mut hints = ArrayString::<HINTS_CAP>::new();
        for (i, hint) in world.context_hints().iter().enumerate() {
            let sep = if i == 0 { "" } else { " | " };
            let _ = write!(hints, "{}{}: {}", sep, hint.key, hint.label);
        }
        let hints_len = hints.chars().count() as i32;
        let available = MAIN_W - 2 * BORDER_INSET;
        let x = BORDER_INSET;

        let status = world.status();
        match status.message() {
            Some(msg) => {
                let msg_style = tone_style(status.tone());
                let msg_len = msg.chars().count() as i32;
                if (msg_len + 2) + (hints_len + 2) <= available {
                    fb.draw_string(x, STATUS_ROW, msg, msg_style);
                    fb.draw_string(MAIN_W - 2 - hints_len, STATUS_ROW, &hints, palette::TEXT);
                } else if status.ttl() > STATUS_TTL_FRAMES {
                    fb.draw_string(x, STATUS_ROW, msg, msg_style);
                } else {
                    fb.draw_string(x, STATUS_ROW, &hints, palette::TEXT);
                }
            }
            None => fb.draw_string(x, STATUS_ROW, &hints, palette::TEXT),
        }
    }

    fn draw_panel(&self, world: &World, fb: &mut ScreenBuffer) {
        for (title, y) in [STATUS_SECTION, TOOLS_SECTION, INVENTORY_SECTION, INFO_SECTION] {
            let mut header = ArrayString::<HEADER_CAP>::new();
            let _ = write!(header, "─ {} ", title);
            for _ in 0..(UI_PANEL_WIDTH as usize).saturating_sub(title.len() + 6) {
                let _ = header.try_push('─');
            }
            draw_panel_text(fb, y, &header, palette::MUTED);
        }

        let player = world.player();
        let mut line = ArrayString::<LINE_CAP>::new();

        let y = STATUS_SECTION.1 + 1;
        let _ = write!(line, "Time: {}", world.clock());
        draw_panel_text(fb, y, &line, palette::TIME);
        line.clear();
        let _ = write!(line, "Money: ${}", player.money);
        draw_panel_text(fb, y + 1, &line, palette::MONEY);
        line.clear();
        let _ = write!(line, "Energy: {}/{}", player.energy, player.max_energy);
        draw_panel_text(fb, y + 2, &line, palette::ENERGY);

        let y = TOOLS_SECTION.1 + 1;
        for (i, tool) in Tool::ALL.into_iter().enumerate() {
            line.clear();
            let selected = player.equipped == Some(tool);
            let style = if selected {
                let _ = write!(line, "{}: [{}]", tool.slot(), tool.label());
                palette::HIGHLIGHT.bold()
            } else {
                let _ = write!(line, "{}: {}", tool.slot(), tool.label());
                if player.owns(tool) {
                    palette::TEXT
                } else {
                    palette::TEXT.dim()
                }
            };
            draw_panel_text(fb, y + i as i32, &line, style);
        }

        let y = INVENTORY_SECTION.1 + 1;
        for (i, item) in ItemKind::ALL.into_iter().take(INVENTORY_ROWS).enumerate() {
            line.clear();
            let _ = write!(line, "{:<7}: {:>3}", item.name(), player.count(item));
            draw_panel_text(fb, y + i as i32, &line, palette::TEXT);
        }

        let y = INFO_SECTION.1 + 1;
        let (fx, fy) = player.facing_tile();
        line.clear();
        let _ = write!(line, "Position: ({}, {})", player.pos.0, player.pos.1);
        draw_panel_text(fb, y, &line, palette::TEXT);
        line.clear();
        let _ = write!(line, "Face To : ({}, {})", fx, fy);
        draw_panel_text(fb, y + 1, &line, palette::TEXT);
    }
}

fn screen_pos(cam: CameraOffset, pos: (i32, i32)) -> (i32, i32) {
    let (x, y) = cam.project(pos);
    (x + BORDER_INSET, y + BORDER_INSET)
}
