//! Conversions between seconds and the text a countdown shows or accepts.

use thiserror::Error;

/// Why a duration entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Nothing but whitespace was entered.
    #[error("no duration entered")]
    Empty,
    /// The entry is not a whole number of seconds that fits in a `u64`.
    #[error("`{0}` is not a whole number of seconds")]
    NotANumber(String),
    /// The entry is zero or negative.
    #[error("duration must be greater than zero, got `{0}`")]
    NotPositive(String),
}

/// Parses user input as a positive whole number of seconds.
///
/// Surrounding whitespace is ignored. Fractions, signs other than a leading
/// `+`, zero, and negative values are rejected.
///
/// ```rust
/// use bubbletea_countdown::clock::{parse_duration, DurationError};
///
/// assert_eq!(parse_duration(" 90 "), Ok(90));
/// assert_eq!(parse_duration("0"), Err(DurationError::NotPositive("0".into())));
/// assert!(parse_duration("abc").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }

    match trimmed.parse::<u64>() {
        Ok(0) => Err(DurationError::NotPositive(trimmed.to_string())),
        Ok(secs) => Ok(secs),
        Err(_) => match trimmed.parse::<i128>() {
            // Whole but negative. Positive values landing here overflowed u64.
            Ok(n) if n <= 0 => Err(DurationError::NotPositive(trimmed.to_string())),
            _ => Err(DurationError::NotANumber(trimmed.to_string())),
        },
    }
}

/// Formats seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so an hour and a bit reads `61:01`.
///
/// ```rust
/// use bubbletea_countdown::clock::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(3661), "61:01");
/// ```
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
