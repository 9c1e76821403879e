//! Farm Quest runner (default binary).
//!
//! Loads `.env` and the environment, sends logs to a file, then drives the
//! poll/update/draw/render loop until the player exits.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{cursor, execute, terminal};

use farm_quest::core::{FileSaveRepository, MemorySaveRepository, SaveRepository};
use farm_quest::input::CrosstermKeys;
use farm_quest::term::{FramePacer, ScreenBuffer, StyleRegistry, TerminalGuard, TerminalRenderer};
use farm_quest::{logging, App, Config, Flow};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init(&config.log_dir)?;
    tracing::info!(?config, "starting farm-quest");
    for note in &config.ignored {
        tracing::warn!("{}", note);
    }

    let saves: Box<dyn SaveRepository> = match FileSaveRepository::new(&config.save_dir) {
        Ok(repo) => {
            tracing::info!("Saves: {}", repo.base_dir().display());
            Box::new(repo)
        }
        Err(e) => {
            tracing::warn!(
                "save directory {} unavailable ({}); saves last for this session only",
                config.save_dir.display(),
                e
            );
            Box::new(MemorySaveRepository::new())
        }
    };

    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let result = run(&config, saves);
    let restored = guard.restore();

    if let Err(e) = &result {
        tracing::error!("game loop failed: {:#}", e);
    }
    result?;
    restored
}

fn run(config: &Config, saves: Box<dyn SaveRepository>) -> Result<()> {
    let mut app = App::new(saves, config.save_slot.clone(), seed_from_time());
    let mut renderer =
        TerminalRenderer::stdout(config.render_mode, StyleRegistry::new(config.color));
    let mut keys = CrosstermKeys::new();
    let mut pacer = FramePacer::new(config.fps);
    let mut fb = ScreenBuffer::default();

    loop {
        let flow = app.run_frame(&mut keys, pacer.remaining(), &mut fb, &mut renderer)?;
        if flow == Flow::Exit {
            tracing::info!("exiting");
            return Ok(());
        }
        pacer.tick();
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Release builds abort on panic, so `TerminalGuard::drop` never runs.
/// Put the terminal back before the default hook prints the message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        default_hook(info);
    }));
}
