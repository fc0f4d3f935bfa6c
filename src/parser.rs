//! Parses `H:MM` and `HH:MM` strings into [`Time`] values.

use crate::time::{Time, TimeError};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("time pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Time string cannot be empty")]
    Empty,
    #[error("Invalid time format: '{0}'")]
    InvalidFormat(String),
    #[error(transparent)]
    OutOfRange(#[from] TimeError),
}

/// Parse a time string like "7:30" or "19:05".
///
/// Surrounding whitespace is ignored. The regex only checks shape; range
/// checks belong to [`Time::new`], so "25:70" fails there.
pub fn parse_time(input: &str) -> Result<Time, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let caps = TIME_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_string()))?;

    // Both groups are at most two ASCII digits, so parsing cannot overflow
    let hour: u32 = caps[1].parse().map_err(|_| ParseError::InvalidFormat(trimmed.to_string()))?;
    let minute: u32 =
        caps[2].parse().map_err(|_| ParseError::InvalidFormat(trimmed.to_string()))?;
    debug!("Parsed '{}' as hour={} minute={}", trimmed, hour, minute);

    Ok(Time::new(hour, minute)?)
}
