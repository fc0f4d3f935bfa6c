//! Validated 24-hour clock time.

use chrono::Timelike;
use std::fmt;
use std::str::FromStr;

/// Raised when an hour or minute falls outside the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid time {hour}:{minute:02}: {reason}")]
    InvalidTime { hour: u32, minute: u32, reason: &'static str },
}

/// An hour (0-23) and minute (0-59). Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u32,
    minute: u32,
}

impl Time {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                reason: "hour must be between 0 and 23",
            });
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                reason: "minute must be between 0 and 59",
            });
        }
        Ok(Self { hour, minute })
    }

    /// Takes the hour and minute of any chrono time value, dropping seconds.
    pub fn from_chrono<T: Timelike>(value: &T) -> Self {
        // chrono already guarantees hour < 24 and minute < 60
        Self { hour: value.hour(), minute: value.minute() }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn is_exact_hour(&self) -> bool {
        self.minute == 0
    }

    /// Any minute within hour 12 counts as noon.
    pub fn is_noon(&self) -> bool {
        self.hour == 12
    }

    /// Any minute within hour 0 counts as midnight.
    pub fn is_midnight(&self) -> bool {
        self.hour == 0
    }

    /// The following hour on the 24-hour clock, wrapping 23 to 0.
    pub fn next_hour(&self) -> u32 {
        (self.hour + 1) % 24
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = crate::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_time(s)
    }
}
