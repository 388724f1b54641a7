//! The module for customized parsing of types for the counting engine.
//!
//! The three objects here, `DateValue`, `DecimalValue`, and `BoolValue`, are
//! simple wrappers over existing data types -- `chrono::NaiveDate` in the case
//! of `DateValue`, `rust_decimal::Decimal` in the case of `DecimalValue`, and
//! plain `bool` in the case of `BoolValue`.
//!
//! This is necessary because `chrono` doesn't use `FromStr` (because it doesn't
//! know the format it needs to parse) and because the engine accepts two date
//! forms, with or without a time of day, while only the calendar date takes
//! part in grouping. `Decimal` separates parsing of values in scientific
//! notation from parsing of normal numbers, so the scientific notation
//! fallback lives in the `FromStr` implementation here. And the boolean
//! wrapper accepts the `yes`/`no`/`1`/`0` aliases that plain `bool` parsing
//! rejects.
//!
//! Each wrapper's `Display` implementation produces the canonical label the
//! engine groups and renders by, so two tokens spell the same label exactly
//! when they parse to equal values.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// The accepted date-with-time-of-day input forms. The time component is
/// parsed so the token is accepted, then discarded before grouping.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// The accepted date-only input forms.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// A calendar date parsed from one of the accepted input forms.
///
/// Only the date component is retained, so `2024-01-15` and
/// `01/15/2024 10:30:00` render the same canonical label.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct DateValue(NaiveDate);

/// The error for a token that matches none of the accepted date forms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateFormatError;

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "use MM/DD/YYYY or YYYY-MM-DD format")
    }
}

impl FromStr for DateValue {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for format in &DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(DateValue(parsed.date()));
            }
        }
        for format in &DATE_FORMATS {
            if let Ok(parsed) = NaiveDate::parse_from_str(s, format) {
                return Ok(DateValue(parsed));
            }
        }
        Err(DateFormatError)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(OUTPUT_DATE_FORMAT))
    }
}

/// A light wrapper over `rust_decimal::Decimal`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct DecimalValue(Decimal);

impl FromStr for DecimalValue {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(DecimalValue)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // normalize() strips trailing zeroes so equal values like 1.5 and
        // 1.50 share a single label
        write!(f, "{}", self.0.normalize())
    }
}

/// A boolean parsed from the `true`/`yes`/`1` and `false`/`no`/`0` aliases,
/// case-insensitively and ignoring surrounding whitespace.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoolValue(bool);

/// The error for a token that matches none of the boolean aliases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoolFormatError;

impl fmt::Display for BoolFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "use true/false, yes/no, or 1/0")
    }
}

impl FromStr for BoolValue {
    type Err = BoolFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(BoolValue(true)),
            "false" | "no" | "0" => Ok(BoolValue(false)),
            _ => Err(BoolFormatError),
        }
    }
}

impl fmt::Display for BoolValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}
