//! Value objects shared by the domain records and the matcher.
//!
//! Dates are stored exactly as the data source delivered them so that the
//! raw text stays searchable; the calendar date is derived on demand.
use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided number is zero.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Locale tag is not one the month-name tables know about.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Offset-carrying layouts seen in the database exports besides RFC 3339.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Parses the calendar date out of a raw timestamp or date string.
///
/// Timestamps with an offset keep the date as written in that offset.
/// Returns `None` for anything that is not a recognised layout.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_with_offset(raw) {
        return Some(parsed.date_naive());
    }
    if let Some(parsed) = parse_naive(raw) {
        return Some(parsed.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses a raw timestamp or date string into an instant.
///
/// Values without an offset are read as UTC; a bare date is midnight UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_with_offset(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = parse_naive(raw) {
        return Some(parsed.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Date or timestamp kept verbatim as the data source sent it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct RecordDate(String);

impl RecordDate {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar date, or `None` when the raw text cannot be parsed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.0)
    }

    /// Point in time, or `None` when the raw text cannot be parsed.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.0)
    }
}

impl Display for RecordDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(value: NaiveDate) -> Self {
        Self(value.format("%Y-%m-%d").to_string())
    }
}

impl From<&str> for RecordDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Macro to generate newtypes for counts that must be at least one.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Wraps the value ensuring it is greater than zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `usize`.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based page index.");
positive_newtype!(PageSize, "Number of records per page.");

impl Default for PageNumber {
    fn default() -> Self {
        Self(1)
    }
}
