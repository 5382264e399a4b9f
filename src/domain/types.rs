//! Canonical parsing for the date and clock-time values the API accepts.
//!
//! Dates travel as `YYYY-MM-DD` and clock times as `HH:MM`; anything else is
//! rejected before it reaches the domain layer. Times submitted as `HH:MM:SS`
//! are accepted and truncated to whole minutes, matching what the reference
//! store returned for persisted rows.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided date was not in `YYYY-MM-DD` form.
    #[error("invalid date, expected YYYY-MM-DD")]
    InvalidDate,
    /// Provided clock time was not in `HH:MM` form.
    #[error("invalid time, expected HH:MM")]
    InvalidTime,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Parses a calendar date in canonical `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, TypeConstraintError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| TypeConstraintError::InvalidDate)
}

/// Parses a clock time, accepting `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, TypeConstraintError> {
    use chrono::Timelike;

    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.with_second(0).unwrap_or(t))
        .map_err(|_| TypeConstraintError::InvalidTime)
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Serde adapter rendering [`NaiveTime`] fields canonically as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_time(&value).map_err(de::Error::custom)
    }
}
