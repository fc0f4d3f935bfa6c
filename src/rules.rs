//! The four phrasings a spoken time can take.
//!
//! Each rule owns a slice of the minute range. The slices are disjoint and
//! cover 0-59 together, so exactly one rule applies to any valid [`Time`].

use crate::time::Time;
use crate::vocabulary::{
    self, VocabularyError, EXACT_HOUR_SUFFIX, MIDNIGHT, NOON, PAST, TO,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatRule {
    /// minute 0: "four o'clock AM", "noon", "midnight"
    ExactHour,
    /// minutes 1-30: "quarter past four AM"
    Past,
    /// minutes 31-39 except 35: "four thirty six AM"
    Digital,
    /// minute 35 and 40-59: "ten to five AM"
    To,
}

impl FormatRule {
    /// Rules in the order they are tried.
    pub const ALL: [FormatRule; 4] =
        [FormatRule::ExactHour, FormatRule::Past, FormatRule::Digital, FormatRule::To];

    /// The rule owning `minute`, or `None` for minutes past 59.
    pub fn for_minute(minute: u32) -> Option<Self> {
        match minute {
            0 => Some(FormatRule::ExactHour),
            1..=30 => Some(FormatRule::Past),
            35 => Some(FormatRule::To),
            31..=39 => Some(FormatRule::Digital),
            40..=59 => Some(FormatRule::To),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatRule::ExactHour => "exact-hour",
            FormatRule::Past => "past",
            FormatRule::Digital => "digital",
            FormatRule::To => "to",
        }
    }

    pub fn can_handle(&self, time: &Time) -> bool {
        let minute = time.minute();
        match self {
            FormatRule::ExactHour => time.is_exact_hour(),
            FormatRule::Past => (1..=30).contains(&minute),
            FormatRule::Digital => (31..=39).contains(&minute) && minute != 35,
            FormatRule::To => minute == 35 || minute >= 40,
        }
    }

    pub fn format(&self, time: &Time) -> Result<String, VocabularyError> {
        match self {
            FormatRule::ExactHour => format_exact_hour(time),
            FormatRule::Past => format_past(time),
            FormatRule::Digital => format_digital(time),
            FormatRule::To => format_to(time),
        }
    }
}

fn format_exact_hour(time: &Time) -> Result<String, VocabularyError> {
    if time.is_noon() {
        return Ok(NOON.to_string());
    }
    if time.is_midnight() {
        return Ok(MIDNIGHT.to_string());
    }
    let hour = time.hour();
    Ok(format!(
        "{} {} {}",
        vocabulary::twelve_hour_word(hour)?,
        EXACT_HOUR_SUFFIX,
        vocabulary::period(hour)?
    ))
}

fn format_past(time: &Time) -> Result<String, VocabularyError> {
    let minute_word = vocabulary::minute_word(time.minute())?;
    Ok(format!("{} {} {}", minute_word, PAST, display_hour(time.hour())?))
}

// The period trails the minute word: "four thirty six PM", never "four PM thirty six".
fn format_digital(time: &Time) -> Result<String, VocabularyError> {
    let minute_word = vocabulary::minute_word(time.minute())?;
    let hour = time.hour();
    match hour {
        12 => Ok(format!("{} {}", NOON, minute_word)),
        0 => Ok(format!("{} {}", MIDNIGHT, minute_word)),
        _ => Ok(format!(
            "{} {} {}",
            vocabulary::twelve_hour_word(hour)?,
            minute_word,
            vocabulary::period(hour)?
        )),
    }
}

fn format_to(time: &Time) -> Result<String, VocabularyError> {
    let minute_word = vocabulary::minute_word(60 - time.minute())?;
    Ok(format!("{} {} {}", minute_word, TO, display_hour(time.next_hour())?))
}

/// "noon", "midnight", or the hour word followed by its period.
fn display_hour(hour: u32) -> Result<String, VocabularyError> {
    match hour {
        12 => Ok(NOON.to_string()),
        0 => Ok(MIDNIGHT.to_string()),
        _ => Ok(format!(
            "{} {}",
            vocabulary::twelve_hour_word(hour)?,
            vocabulary::period(hour)?
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn time(hour: u32, minute: u32) -> Time {
        Time::new(hour, minute).unwrap()
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        for minute in 0..60 {
            let t = time(9, minute);
            let handlers: Vec<_> = FormatRule::ALL.iter().filter(|r| r.can_handle(&t)).collect();
            assert_eq!(handlers.len(), 1, "minute {} matched {:?}", minute, handlers);
            assert_eq!(Some(*handlers[0]), FormatRule::for_minute(minute));
        }
    }

    #[test]
    fn test_for_minute_rejects_past_59() {
        assert_eq!(FormatRule::for_minute(60), None);
    }

    #[test_case(5, 31, true)]
    #[test_case(15, 39, true)]
    #[test_case(1, 15, false)]
    #[test_case(21, 35, false)]
    #[test_case(23, 48, false)]
    fn test_digital_can_handle(hour: u32, minute: u32, expected: bool) {
        assert_eq!(FormatRule::Digital.can_handle(&time(hour, minute)), expected);
    }

    #[test_case(12, 0, "noon")]
    #[test_case(0, 0, "midnight")]
    #[test_case(4, 0, "four o'clock AM")]
    #[test_case(19, 0, "seven o'clock PM")]
    fn test_exact_hour(hour: u32, minute: u32, expected: &str) {
        assert_eq!(FormatRule::ExactHour.format(&time(hour, minute)).unwrap(), expected);
    }

    #[test_case(2, 5, "five past two AM")]
    #[test_case(12, 11, "eleven past noon")]
    #[test_case(0, 1, "one past midnight")]
    #[test_case(21, 14, "fourteen past nine PM")]
    fn test_past(hour: u32, minute: u32, expected: &str) {
        assert_eq!(FormatRule::Past.format(&time(hour, minute)).unwrap(), expected);
    }

    #[test_case(12, 39, "noon thirty nine")]
    #[test_case(0, 34, "midnight thirty four")]
    #[test_case(7, 32, "seven thirty two AM")]
    #[test_case(16, 36, "four thirty six PM")]
    fn test_digital(hour: u32, minute: u32, expected: &str) {
        assert_eq!(FormatRule::Digital.format(&time(hour, minute)).unwrap(), expected);
    }

    #[test_case(7, 35, "twenty five to eight AM")]
    #[test_case(11, 59, "one to noon")]
    #[test_case(23, 59, "one to midnight")]
    #[test_case(0, 40, "twenty to one AM")]
    #[test_case(12, 40, "twenty to one PM")]
    fn test_to(hour: u32, minute: u32, expected: &str) {
        assert_eq!(FormatRule::To.format(&time(hour, minute)).unwrap(), expected);
    }

    #[test]
    fn test_misapplied_rule_surfaces_vocabulary_miss() {
        // Past asked to speak minute 45 has no word for it
        assert_eq!(
            FormatRule::Past.format(&time(3, 45)),
            Err(VocabularyError::InvalidMinute(45))
        );
    }
}
