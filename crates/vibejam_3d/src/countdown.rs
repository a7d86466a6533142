//! Countdown clock
//!
//! Pure time arithmetic for the floating countdown display. The caller
//! supplies `now`, so the clock is deterministic under test; the floating
//! and swaying motion comes from the regular drivers.

use std::fmt;
use std::time::{Duration, SystemTime};

/// Time remaining until the deadline, broken into display units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub fn from_duration(remaining: Duration) -> Self {
        let total = remaining.as_secs();
        Self {
            days: total / 86_400,
            hours: total / 3_600 % 24,
            minutes: total / 60 % 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for TimeLeft {
    /// Zero-padded `DD:HH:MM:SS`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Counts down to the submission deadline
#[derive(Clone, Copy, Debug)]
pub struct CountdownClock {
    deadline: SystemTime,
}

impl CountdownClock {
    pub fn new(deadline: SystemTime) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> SystemTime {
        self.deadline
    }

    /// Time remaining at `now`; zero once the deadline has passed
    pub fn remaining(&self, now: SystemTime) -> TimeLeft {
        match self.deadline.duration_since(now) {
            Ok(remaining) => TimeLeft::from_duration(remaining),
            Err(_) => TimeLeft::default(),
        }
    }

    /// Display string at `now`
    pub fn display(&self, now: SystemTime) -> String {
        self.remaining(now).to_string()
    }
}
