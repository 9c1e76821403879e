//! Screen state machine: main menu, playing, paused.
//!
//! `App` owns the world and routes each frame's key to the active screen.
//! Gameplay and save/load problems never escape as errors; they become
//! status messages. Only input and terminal I/O failures end the loop.

use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;

use thiserror::Error;

use crate::core::{MenuChoice, Menu, SaveData, SaveError, SaveRepository, StatusLine, World};
use crate::input::KeySource;
use crate::term::{CellStyle, Color, FarmView, MenuView, ScreenBuffer, TerminalRenderer};
use crate::types::{
    GameAction, Key, MenuAction, Tone, STATUS_LONG_TTL_FRAMES, WELCOME_TTL_FRAMES,
};

/// How many frames a menu notice stays up.
const NOTICE_TTL_FRAMES: u32 = 90;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("reading input failed: {0:#}")]
    Input(anyhow::Error),

    #[error("terminal output failed: {0:#}")]
    Terminal(anyhow::Error),
}

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu(Menu),
    Playing,
    Paused(Menu),
}

pub struct App {
    screen: Screen,
    world: World,
    saves: Box<dyn SaveRepository>,
    save_slot: String,
    seed: u32,
    games_started: u32,
    notice: StatusLine,
    farm_view: FarmView,
    menu_view: MenuView,
}

impl App {
    pub fn new(saves: Box<dyn SaveRepository>, save_slot: impl Into<String>, seed: u32) -> Self {
        Self {
            screen: Screen::MainMenu(Menu::main()),
            world: World::new(seed),
            saves,
            save_slot: save_slot.into(),
            seed,
            games_started: 0,
            notice: StatusLine::new(),
            farm_view: FarmView::new(),
            menu_view: MenuView::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Message shown under the menus, e.g. a failed load.
    pub fn notice(&self) -> Option<&str> {
        self.notice.message()
    }

    /// One whole frame: poll a key, update, draw and render.
    pub fn run_frame<K, W>(
        &mut self,
        keys: &mut K,
        timeout: Duration,
        fb: &mut ScreenBuffer,
        renderer: &mut TerminalRenderer<W>,
    ) -> Result<Flow, AppError>
    where
        K: KeySource + ?Sized,
        W: Write,
    {
        let key = keys.poll_key(timeout).map_err(AppError::Input)?;
        let flow = self.update(key);
        if flow == Flow::Continue {
            self.draw(fb);
            renderer.render(fb).map_err(AppError::Terminal)?;
        }
        Ok(flow)
    }

    /// Advance one frame with at most one key.
    pub fn update(&mut self, key: Option<Key>) -> Flow {
        match &mut self.screen {
            Screen::MainMenu(menu) | Screen::Paused(menu) => {
                menu.tick();
                self.notice.tick();
                let choice = key
                    .and_then(MenuAction::from_key)
                    .and_then(|action| menu.handle(action));
                match choice {
                    Some(choice) => self.choose(choice),
                    None => Flow::Continue,
                }
            }
            Screen::Playing => self.play(key),
        }
    }

    fn play(&mut self, key: Option<Key>) -> Flow {
        match key.and_then(GameAction::from_key) {
            Some(GameAction::Pause) => {
                self.screen = Screen::Paused(Menu::pause());
                return Flow::Continue;
            }
            Some(GameAction::Quit) => {
                tracing::info!(day = self.world.clock().day(), "quit from gameplay");
                return Flow::Exit;
            }
            Some(action) => {
                self.world.apply(action);
            }
            None => {}
        }
        self.world.tick_frame();
        Flow::Continue
    }

    fn choose(&mut self, choice: MenuChoice) -> Flow {
        match choice {
            MenuChoice::NewGame => self.new_game(),
            MenuChoice::Continue => self.continue_game(),
            MenuChoice::Resume => self.screen = Screen::Playing,
            MenuChoice::SaveGame => {
                self.save_game();
                self.screen = Screen::Playing;
            }
            MenuChoice::MainMenu => self.screen = Screen::MainMenu(Menu::main()),
            MenuChoice::Exit => return Flow::Exit,
        }
        Flow::Continue
    }

    fn new_game(&mut self) {
        self.games_started = self.games_started.wrapping_add(1);
        self.world = World::new(self.seed.wrapping_add(self.games_started));
        self.world.set_status(
            "Welcome to Farm Quest! Use WASD to move.",
            Tone::Success,
            WELCOME_TTL_FRAMES,
        );
        self.notice.clear();
        self.screen = Screen::Playing;
        tracing::info!(game = self.games_started, "new game started");
    }

    fn continue_game(&mut self) {
        match self.saves.load(&self.save_slot).and_then(SaveData::restore) {
            Ok(mut world) => {
                let mut text = String::new();
                let _ = write!(text, "Welcome back! Day {}", world.clock().day());
                world.set_status(&text, Tone::Success, STATUS_LONG_TTL_FRAMES);
                self.world = world;
                self.notice.clear();
                self.screen = Screen::Playing;
                tracing::info!(slot = %self.save_slot, "continued saved game");
            }
            Err(SaveError::NotFound(_)) => {
                self.notice
                    .set("No saved game found.", Tone::Warning, NOTICE_TTL_FRAMES);
            }
            Err(e) => {
                tracing::warn!(slot = %self.save_slot, "failed to load save: {}", e);
                self.notice
                    .set("Could not load the saved game.", Tone::Error, NOTICE_TTL_FRAMES);
            }
        }
    }

    fn save_game(&mut self) {
        let data = SaveData::capture(&self.world);
        match self.saves.save(&self.save_slot, &data) {
            Ok(()) => {
                self.world
                    .set_status("Game saved!", Tone::Success, STATUS_LONG_TTL_FRAMES);
                tracing::info!(slot = %self.save_slot, "game saved");
            }
            Err(e) => {
                tracing::warn!(slot = %self.save_slot, "failed to save: {}", e);
                self.world
                    .set_status("Save failed! See the log.", Tone::Error, STATUS_LONG_TTL_FRAMES);
            }
        }
    }

    /// Draw the active screen into `fb`.
    pub fn draw(&self, fb: &mut ScreenBuffer) {
        match &self.screen {
            Screen::MainMenu(menu) | Screen::Paused(menu) => {
                self.menu_view.render_into(menu, fb);
                if let Some(text) = self.notice.message() {
                    let x = (fb.width() as i32 - text.chars().count() as i32) / 2;
                    let y = fb.height() as i32 - 6;
                    fb.draw_string(x, y, text, CellStyle::fg(Color::BrightRed));
                }
            }
            Screen::Playing => self.farm_view.render_into(&self.world, fb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemorySaveRepository;
    use crate::types::Direction;

    fn app() -> App {
        App::new(Box::new(MemorySaveRepository::new()), "test", 7)
    }

    fn press(app: &mut App, keys: &[Key]) -> Flow {
        let mut flow = Flow::Continue;
        for key in keys {
            flow = app.update(Some(*key));
        }
        flow
    }

    #[test]
    fn starts_on_the_main_menu() {
        assert!(matches!(app().screen(), Screen::MainMenu(_)));
    }

    #[test]
    fn new_game_shows_welcome() {
        let mut app = app();
        press(&mut app, &[Key::Enter]);
        assert_eq!(app.screen(), &Screen::Playing);
        assert_eq!(
            app.world().status().message(),
            Some("Welcome to Farm Quest! Use WASD to move.")
        );
        assert_eq!(app.world().status().ttl(), WELCOME_TTL_FRAMES);
    }

    #[test]
    fn escape_on_main_menu_exits() {
        assert_eq!(press(&mut app(), &[Key::Escape]), Flow::Exit);
    }

    #[test]
    fn pause_and_resume() {
        let mut app = app();
        press(&mut app, &[Key::Enter, Key::Dir(Direction::Right), Key::Escape]);
        assert!(matches!(app.screen(), Screen::Paused(_)));

        // Escape on the pause menu resumes.
        press(&mut app, &[Key::Escape]);
        assert_eq!(app.screen(), &Screen::Playing);
        assert_eq!(app.world().player().pos, (51, 10));
    }

    #[test]
    fn idle_frames_tick_the_world() {
        let mut app = app();
        press(&mut app, &[Key::Enter]);
        for _ in 0..WELCOME_TTL_FRAMES {
            app.update(None);
        }
        assert_eq!(app.world().status().message(), None);
    }

    #[test]
    fn save_then_continue_restores_progress() {
        let mut app = app();
        press(&mut app, &[Key::Enter, Key::Dir(Direction::Right), Key::Dir(Direction::Right)]);
        let energy = app.world().player().energy;

        // Pause, move to "Save Game", select.
        press(&mut app, &[Key::Escape, Key::Dir(Direction::Down), Key::Enter]);
        assert_eq!(app.screen(), &Screen::Playing);
        assert_eq!(app.world().status().message(), Some("Game saved!"));

        // Pause, "Main Menu", then "Continue".
        press(
            &mut app,
            &[
                Key::Escape,
                Key::Dir(Direction::Down),
                Key::Dir(Direction::Down),
                Key::Enter,
            ],
        );
        assert!(matches!(app.screen(), Screen::MainMenu(_)));
        press(&mut app, &[Key::Dir(Direction::Down), Key::Enter]);

        assert_eq!(app.screen(), &Screen::Playing);
        assert_eq!(app.world().player().pos, (52, 10));
        assert_eq!(app.world().player().energy, energy);
        assert_eq!(app.world().status().message(), Some("Welcome back! Day 1"));
    }

    #[test]
    fn continue_without_a_save_stays_on_the_menu() {
        let mut app = app();
        press(&mut app, &[Key::Dir(Direction::Down), Key::Enter]);
        assert!(matches!(app.screen(), Screen::MainMenu(_)));
        assert_eq!(app.notice(), Some("No saved game found."));
    }

    #[test]
    fn ctrl_c_on_the_pause_menu_exits() {
        let mut app = app();
        press(&mut app, &[Key::Enter, Key::Escape]);
        assert!(matches!(app.screen(), Screen::Paused(_)));
        assert_eq!(app.update(Some(Key::Interrupt)), Flow::Exit);
    }

    #[test]
    fn q_quits_from_gameplay() {
        let mut app = app();
        press(&mut app, &[Key::Enter]);
        assert_eq!(press(&mut app, &[Key::Char('q')]), Flow::Exit);
    }

    #[test]
    fn draw_matches_screen() {
        let mut app = app();
        let mut fb = ScreenBuffer::default();
        app.draw(&mut fb);
        assert_eq!(fb.get(0, 0).unwrap().ch, '╔');
        assert_eq!(fb.get(67, 0).unwrap().ch, '╌');

        press(&mut app, &[Key::Enter]);
        app.draw(&mut fb);
        assert_eq!(fb.get(67, 0).unwrap().ch, '╦');
    }
}
