//! British English words used to speak a clock time.
//!
//! All tables are compile-time constants, so lookups are pure and can be
//! shared freely between threads.

use std::fmt;

pub const NOON: &str = "noon";
pub const MIDNIGHT: &str = "midnight";
pub const EXACT_HOUR_SUFFIX: &str = "o'clock";
pub const PAST: &str = "past";
pub const TO: &str = "to";
pub const AM: &str = "AM";
pub const PM: &str = "PM";

/// Hour words indexed by the hour in 12-hour form (0 reads as "twelve").
static HOUR_WORDS: [&str; 12] = [
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

/// Minute words indexed by minute. Index 0 and 35 have no entry: an exact hour
/// has no minute word, and 35 is always spoken as "twenty five to".
static MINUTE_WORDS: [Option<&str>; 40] = [
    None,
    Some("one"),
    Some("two"),
    Some("three"),
    Some("four"),
    Some("five"),
    Some("six"),
    Some("seven"),
    Some("eight"),
    Some("nine"),
    Some("ten"),
    Some("eleven"),
    Some("twelve"),
    Some("thirteen"),
    Some("fourteen"),
    Some("quarter"),
    Some("sixteen"),
    Some("seventeen"),
    Some("eighteen"),
    Some("nineteen"),
    Some("twenty"),
    Some("twenty one"),
    Some("twenty two"),
    Some("twenty three"),
    Some("twenty four"),
    Some("twenty five"),
    Some("twenty six"),
    Some("twenty seven"),
    Some("twenty eight"),
    Some("twenty nine"),
    Some("half"),
    Some("thirty one"),
    Some("thirty two"),
    Some("thirty three"),
    Some("thirty four"),
    None,
    Some("thirty six"),
    Some("thirty seven"),
    Some("thirty eight"),
    Some("thirty nine"),
];

/// Lookup misses. A miss means a formatting rule asked for a word outside
/// the range it owns, so these are internal defects rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("Hour {0} not supported in vocabulary")]
    InvalidHour(u32),
    #[error("Minute {0} not supported in vocabulary")]
    InvalidMinute(u32),
}

/// Half of the day a 24-hour clock hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => AM,
            Period::Pm => PM,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word for an hour already reduced to 12-hour form (0-11).
pub fn hour_word(hour: u32) -> Result<&'static str, VocabularyError> {
    HOUR_WORDS.get(hour as usize).copied().ok_or(VocabularyError::InvalidHour(hour))
}

/// Word for a 24-hour clock hour (0-23), reduced to 12-hour form first.
pub fn twelve_hour_word(hour: u32) -> Result<&'static str, VocabularyError> {
    if hour > 23 {
        return Err(VocabularyError::InvalidHour(hour));
    }
    hour_word(hour % 12)
}

/// Word for a minute in 1-39, excluding 35.
pub fn minute_word(minute: u32) -> Result<&'static str, VocabularyError> {
    MINUTE_WORDS
        .get(minute as usize)
        .copied()
        .flatten()
        .ok_or(VocabularyError::InvalidMinute(minute))
}

/// AM for hours 0-11, PM for 12-23.
pub fn period(hour: u32) -> Result<Period, VocabularyError> {
    match hour {
        0..=11 => Ok(Period::Am),
        12..=23 => Ok(Period::Pm),
        _ => Err(VocabularyError::InvalidHour(hour)),
    }
}
