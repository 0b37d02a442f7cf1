//! Calendar deadlines and their date-picker text form.
//!
//! # Invariants
//! - Text form is always `YYYY-MM-DD`, both for parsing and rendering.
//! - Default deadlines never overflow; they saturate at the latest
//!   representable date instead.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Calendar date a project or subcategory is due on.
pub type Deadline = NaiveDate;

/// `chrono` format string matching the date picker wire format.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Error returned when deadline text cannot be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineParseError {
    /// Input is not shaped like `YYYY-MM-DD`.
    Malformed(String),
    /// Input is shaped correctly but names no real day (e.g. `2025-02-30`).
    InvalidDate(String),
}

impl Display for DeadlineParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "deadline `{value}` must use the YYYY-MM-DD format")
            }
            Self::InvalidDate(value) => write!(f, "deadline `{value}` is not a calendar date"),
        }
    }
}

impl Error for DeadlineParseError {}

/// Parses date picker text into a deadline.
///
/// Surrounding whitespace is ignored; anything else must match
/// `YYYY-MM-DD` exactly.
pub fn parse_deadline(text: &str) -> Result<Deadline, DeadlineParseError> {
    let trimmed = text.trim();
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(DeadlineParseError::Malformed(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DEADLINE_FORMAT)
        .map_err(|_| DeadlineParseError::InvalidDate(trimmed.to_string()))
}

/// Renders a deadline the way the date picker expects it.
pub fn format_deadline(deadline: Deadline) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}

/// Returns `today + offset_days`, saturating at `NaiveDate::MAX`.
pub fn default_deadline(today: Deadline, offset_days: u32) -> Deadline {
    today
        .checked_add_days(Days::new(u64::from(offset_days)))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::{default_deadline, format_deadline, parse_deadline, DeadlineParseError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn parse_accepts_picker_format_with_padding() {
        assert_eq!(parse_deadline(" 2025-03-09 ").unwrap(), date(2025, 3, 9));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for input in ["", "2025-3-9", "09/03/2025", "2025-03-09T00:00:00Z", "soon"] {
            let err = parse_deadline(input).unwrap_err();
            assert!(
                matches!(err, DeadlineParseError::Malformed(_)),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_days() {
        let err = parse_deadline("2025-02-30").unwrap_err();
        assert_eq!(err, DeadlineParseError::InvalidDate("2025-02-30".to_string()));
        assert!(err.to_string().contains("not a calendar date"));
    }

    #[test]
    fn format_zero_pads_fields() {
        assert_eq!(format_deadline(date(2025, 1, 5)), "2025-01-05");
    }

    #[test]
    fn default_deadline_crosses_month_and_year_boundaries() {
        assert_eq!(default_deadline(date(2024, 12, 28), 10), date(2025, 1, 7));
        assert_eq!(default_deadline(date(2024, 2, 25), 10), date(2024, 3, 6));
    }

    #[test]
    fn default_deadline_saturates() {
        assert_eq!(default_deadline(NaiveDate::MAX, 10), NaiveDate::MAX);
    }
}
