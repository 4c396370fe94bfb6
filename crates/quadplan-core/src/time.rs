//! Wall-clock helpers: `HH:MM` strings, minute offsets, and date keys.
//!
//! All times are local wall-clock; date keys are zero-padded `YYYY-MM-DD`.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from parsing time strings and date keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input was not two colon-separated fields
    #[error("expected HH:MM, got '{0}'")]
    InvalidShape(String),

    /// A field was not an integer
    #[error("non-numeric field in '{0}'")]
    InvalidField(String),

    /// Date key was not `YYYY-MM-DD`
    #[error("expected YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
}

/// Parse an `HH:MM` string into minutes since midnight.
///
/// Accepts exactly two colon-separated integer fields. No range check is
/// performed on either field; wall-clock input is validated at the UI
/// boundary, not here.
pub fn parse_time_to_minutes(value: &str) -> Result<u32, TimeParseError> {
    let parts: Vec<&str> = value.split(':').collect();
    let [hours, minutes] = parts.as_slice() else {
        return Err(TimeParseError::InvalidShape(value.to_string()));
    };
    let hours: u32 = hours
        .parse()
        .map_err(|_| TimeParseError::InvalidField(value.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| TimeParseError::InvalidField(value.to_string()))?;
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded `HH:MM`.
///
/// Offsets of 1440 or more keep growing the hours field (1500 renders as
/// "25:00") rather than rolling over to the next day. Schedules spilling
/// past midnight display that way deliberately; since
/// [`parse_time_to_minutes`] does no range check, the round-trip holds for
/// every offset.
pub fn minutes_to_time(value: u32) -> String {
    format!("{:02}:{:02}", value / 60, value % 60)
}

/// Format a date as its canonical `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date key.
pub fn parse_date_key(value: &str) -> Result<NaiveDate, TimeParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| TimeParseError::InvalidDate(value.to_string()))
}
