//! In-game clock.
//!
//! Time is kept as a single monotonic minute counter since the start of day 1.
//! Day, hour and minute are derived from it, so timers stored as absolute
//! minutes (stump regrowth, crop stages) compare correctly across midnight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{DAY_START_MINUTES, MINUTES_PER_DAY, MINUTES_PER_HOUR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameClock {
    total_minutes: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock {
    /// 6:00 AM on day 1.
    pub fn new() -> Self {
        Self {
            total_minutes: DAY_START_MINUTES,
        }
    }

    pub fn from_total_minutes(total_minutes: u32) -> Self {
        Self { total_minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    /// Day number, starting at 1.
    pub fn day(&self) -> u32 {
        self.total_minutes / MINUTES_PER_DAY + 1
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        (self.total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        self.total_minutes % MINUTES_PER_HOUR
    }

    pub fn advance(&mut self, minutes: u32) {
        self.total_minutes = self.total_minutes.saturating_add(minutes);
    }

    /// Jump to 6:00 AM of the following day.
    pub fn next_morning(&mut self) {
        let today = self.total_minutes / MINUTES_PER_DAY;
        self.total_minutes = (today + 1) * MINUTES_PER_DAY + DAY_START_MINUTES;
    }
}

/// Formats as `hh:mm AM` using a 12-hour clock.
impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02} {}", display_hour, self.minute(), period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_six_am_day_one() {
        let clock = GameClock::new();
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.hour(), 6);
        assert_eq!(clock.minute(), 0);
        assert_eq!(clock.to_string(), "06:00 AM");
    }

    #[test]
    fn formats_afternoon_and_midnight() {
        assert_eq!(GameClock::from_total_minutes(13 * 60 + 5).to_string(), "01:05 PM");
        assert_eq!(GameClock::from_total_minutes(12 * 60).to_string(), "12:00 PM");
        assert_eq!(GameClock::from_total_minutes(MINUTES_PER_DAY).to_string(), "12:00 AM");
    }

    #[test]
    fn advancing_past_midnight_rolls_the_day() {
        let mut clock = GameClock::from_total_minutes(23 * 60 + 50);
        clock.advance(20);
        assert_eq!(clock.day(), 2);
        assert_eq!(clock.hour(), 0);
        assert_eq!(clock.minute(), 10);
    }

    #[test]
    fn next_morning_always_moves_to_the_following_day() {
        let mut clock = GameClock::new();
        clock.next_morning();
        assert_eq!((clock.day(), clock.hour(), clock.minute()), (2, 6, 0));

        // Just after midnight still counts as "today" for the calendar.
        let mut late = GameClock::from_total_minutes(MINUTES_PER_DAY + 30);
        late.next_morning();
        assert_eq!((late.day(), late.hour()), (3, 6));
    }
}
