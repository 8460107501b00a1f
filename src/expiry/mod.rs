//! Expiry date arithmetic.
//!
//! All comparisons work on calendar days. A due date equal to today counts
//! as expired and has zero days left.

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use crate::utils::DATE_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    #[error("Invalid due date '{value}', expected format {format}")]
    InvalidDate { value: String, format: String },
}

/// Parse a due date using a chrono format string.
///
/// Formats carrying a time of day are accepted; the time is dropped.
pub fn parse_due_date(text: &str, format: &str) -> Result<NaiveDate, ExpiryError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, format)
        .or_else(|_| NaiveDateTime::parse_from_str(text, format).map(|dt| dt.date()))
        .map_err(|_| ExpiryError::InvalidDate {
            value: text.to_string(),
            format: format.to_string(),
        })
}

/// Whole days from `today` until `due`, never negative.
pub fn days_between(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days().max(0)
}

/// Whether `due` has been reached on `today` (same day included).
pub fn is_expired_on(due: NaiveDate, today: NaiveDate) -> bool {
    due <= today
}

/// Days left until a `YYYY-MM-DD` due date.
///
/// Returns 0 for a due date of today or earlier.
pub fn days_to_expire(due_date: &str, clock: &dyn Clock) -> Result<i64, ExpiryError> {
    let due = parse_due_date(due_date, DATE_FORMAT)?;
    Ok(days_between(due, clock.today()))
}

/// Whether the due date, parsed with `format`, is today or in the past.
pub fn is_expired(due_date: &str, format: &str, clock: &dyn Clock) -> Result<bool, ExpiryError> {
    let due = parse_due_date(due_date, format)?;
    Ok(is_expired_on(due, clock.today()))
}
