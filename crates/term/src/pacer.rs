//! Soft frame-rate limiter.

use std::time::{Duration, Instant};

/// Sleeps off whatever is left of each frame's budget.
///
/// Frames are never skipped; a slow frame simply runs late and the next one
/// starts immediately.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / fps.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// How long to sleep after a frame that took `elapsed`.
    pub fn delay_for(&self, elapsed: Duration) -> Duration {
        self.target.saturating_sub(elapsed)
    }

    /// Budget left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.delay_for(self.last_tick.elapsed())
    }

    /// Finish the frame: sleep the remainder, then start the next one.
    pub fn tick(&mut self) {
        let delay = self.remaining();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.last_tick = Instant::now();
    }
}
