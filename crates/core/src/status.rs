//! Transient status message shown on the status line.

use crate::types::Tone;

/// At most one live message; setting a new one replaces the old.
///
/// The text buffer is reused between messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    tone: Tone,
    ttl: u32,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` for `ttl` frames.
    pub fn set(&mut self, text: &str, tone: Tone, ttl: u32) {
        self.text.clear();
        self.text.push_str(text);
        self.tone = tone;
        self.ttl = ttl;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.tone = Tone::Info;
        self.ttl = 0;
    }

    /// Advance one frame. The message is dropped when its lifetime runs out.
    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
        if self.ttl == 0 && !self.text.is_empty() {
            self.clear();
        }
    }

    /// Current message, if one is live.
    pub fn message(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Frames left before the message disappears.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_expires_on_the_last_tick() {
        let mut status = StatusLine::new();
        status.set("X", Tone::Info, 30);

        for _ in 0..29 {
            status.tick();
            assert_eq!(status.message(), Some("X"));
        }
        status.tick();
        assert_eq!(status.message(), None);
        assert_eq!(status.ttl(), 0);
    }

    #[test]
    fn newer_message_overwrites() {
        let mut status = StatusLine::new();
        status.set("first", Tone::Info, 30);
        status.tick();
        status.set("second", Tone::Error, 5);

        assert_eq!(status.message(), Some("second"));
        assert_eq!(status.tone(), Tone::Error);
        assert_eq!(status.ttl(), 5);
    }

    #[test]
    fn ticking_an_empty_line_is_harmless() {
        let mut status = StatusLine::new();
        status.tick();
        assert_eq!(status.message(), None);
    }
}
