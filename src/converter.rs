//! Turns a [`Time`] into its British spoken phrase.

use crate::rules::FormatRule;
use crate::time::Time;
use crate::vocabulary::VocabularyError;
use log::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Time cannot be missing")]
    MissingInput,
    #[error("No formatter found for time: {0}")]
    DispatchExhausted(Time),
    #[error("Vocabulary lookup failed for time {time}: {source}")]
    Vocabulary {
        time: Time,
        #[source]
        source: VocabularyError,
    },
}

impl ConversionError {
    /// True when the failure is a defect in the rule set rather than
    /// something the caller passed in.
    pub fn is_internal(&self) -> bool {
        !matches!(self, ConversionError::MissingInput)
    }
}

/// Seam between the formatting core and whatever shell feeds it times.
pub trait SpokenTimeConverter: Send + Sync {
    fn convert(&self, time: &Time) -> Result<String, ConversionError>;

    /// Rejects an absent time explicitly instead of panicking.
    fn convert_optional(&self, time: Option<&Time>) -> Result<String, ConversionError> {
        match time {
            Some(time) => self.convert(time),
            None => Err(ConversionError::MissingInput),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BritishSpokenTimeConverter;

impl BritishSpokenTimeConverter {
    pub fn new() -> Self {
        Self
    }
}

impl SpokenTimeConverter for BritishSpokenTimeConverter {
    fn convert(&self, time: &Time) -> Result<String, ConversionError> {
        let rule = match FormatRule::for_minute(time.minute()) {
            Some(rule) if rule.can_handle(time) => rule,
            _ => {
                error!("No formatting rule claimed {}", time);
                return Err(ConversionError::DispatchExhausted(*time));
            }
        };
        debug!("Formatting {} with the {} rule", time, rule.name());

        rule.format(time).map_err(|source| {
            error!("Rule {} failed for {}: {}", rule.name(), time, source);
            ConversionError::Vocabulary { time: *time, source }
        })
    }
}
