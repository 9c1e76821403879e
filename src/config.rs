//! Runtime configuration loaded from the environment.

use std::env;
use std::path::PathBuf;

use crate::term::RenderMode;
use crate::types::DEFAULT_FPS;

const APP_NAME: &str = "farm-quest";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub fps: u32,
    pub render_mode: RenderMode,
    pub color: bool,
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
    pub save_slot: String,
    /// Variables that were set but not understood. Loading runs before the
    /// log subscriber exists, so the caller logs these after `logging::init`.
    pub ignored: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            render_mode: RenderMode::Full,
            color: true,
            save_dir: default_save_dir(),
            log_dir: default_log_dir(),
            save_slot: "quicksave".to_string(),
            ignored: Vec::new(),
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FARM_FPS` - Target frame rate, 1-240 (default: 30)
    /// - `FARM_RENDER_MODE` - `full` or `diff` (default: full)
    /// - `NO_COLOR` - Any non-empty value disables styling
    /// - `FARM_NO_COLOR` - Boolean, disables styling when true
    /// - `FARM_SAVE_DIR` - Save slot directory (default: platform data dir)
    /// - `FARM_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `FARM_SAVE_SLOT` - Slot used by Save Game / Continue (default: quicksave)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(fps) = lookup("FARM_FPS") {
            match fps.trim().parse::<u32>() {
                Ok(fps) => config.fps = fps.clamp(1, 240),
                Err(_) => config.ignore(format!("Ignoring invalid FARM_FPS '{}'", fps)),
            }
        }
        if let Some(mode) = lookup("FARM_RENDER_MODE") {
            match mode.trim().to_lowercase().as_str() {
                "full" => config.render_mode = RenderMode::Full,
                "diff" => config.render_mode = RenderMode::Diff,
                other => config.ignore(format!("Ignoring unknown FARM_RENDER_MODE '{}'", other)),
            }
        }
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        if let Some(no_color) = lookup("FARM_NO_COLOR").as_deref().and_then(parse_bool) {
            config.color = !no_color;
        }
        if let Some(dir) = lookup("FARM_SAVE_DIR").filter(|v| !v.is_empty()) {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("FARM_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(slot) = lookup("FARM_SAVE_SLOT") {
            if is_valid_slot(&slot) {
                config.save_slot = slot;
            } else {
                config.ignore(format!("Ignoring unsafe FARM_SAVE_SLOT '{}'", slot));
            }
        }

        config
    }

    fn ignore(&mut self, note: String) {
        self.ignored.push(note);
    }
}

/// Slot names become file names, so keep them to a safe alphabet.
fn is_valid_slot(slot: &str) -> bool {
    !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Platform data directory:
/// - Linux: `~/.local/share/farm-quest`
/// - macOS: `~/Library/Application Support/farm-quest`
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./saves"))
}

fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/farm-quest/logs"))
}
