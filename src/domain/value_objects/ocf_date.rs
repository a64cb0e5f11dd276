//! # Dates
//!
//! Calendar dates in the interchange form (`YYYY-MM-DD`) and their ledger
//! time counterpart (`YYYY-MM-DDT00:00:00.000Z`).
//!
//! [`OcfDate`] is the interchange value; [`LedgerTime`] is the same calendar
//! day rendered as a ledger timestamp. Converting a date to ledger time and
//! back is always the identity.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::value_objects::ocf_date::{LedgerTime, OcfDate};
//!
//! let date = OcfDate::parse("2024-03-31").unwrap();
//! let time = LedgerTime::from(date);
//! assert_eq!(time.to_string(), "2024-03-31T00:00:00.000Z");
//! assert_eq!(OcfDate::from(time), date);
//! ```

use crate::domain::errors::{TranslationError, TranslationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LEDGER_MIDNIGHT_SUFFIX: &str = "T00:00:00.000Z";

/// A calendar date in interchange form.
///
/// Deserialization is strict: interchange dates never carry a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OcfDate(NaiveDate);

impl OcfDate {
    /// Parses a strict `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the text is not a valid zero-padded date.
    pub fn parse(input: &str) -> TranslationResult<Self> {
        if input.len() != 10 {
            return Err(date_error(input));
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| date_error(input))
    }

    /// Parses either a bare date or a ledger timestamp, keeping only the
    /// calendar day.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the date segment is not a valid date.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocf_ledger::domain::value_objects::ocf_date::OcfDate;
    ///
    /// let a = OcfDate::parse_lenient("2023-01-15T00:00:00.000Z").unwrap();
    /// let b = OcfDate::parse_lenient("2023-01-15").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse_lenient(input: &str) -> TranslationResult<Self> {
        let date_segment = input.split_once('T').map_or(input, |(date, _)| date);
        Self::parse(date_segment).map_err(|_| date_error(input))
    }

    /// Wraps a chrono date.
    #[inline]
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the chrono date.
    #[inline]
    #[must_use]
    pub const fn get(self) -> NaiveDate {
        self.0
    }

    /// Renders as a ledger timestamp at midnight UTC.
    #[must_use]
    pub fn to_ledger_time(self) -> LedgerTime {
        LedgerTime(self)
    }
}

fn date_error(input: &str) -> TranslationError {
    TranslationError::type_mismatch("", "date (YYYY-MM-DD)", format!("'{input}'"))
}

impl fmt::Display for OcfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for OcfDate {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for OcfDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OcfDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A ledger timestamp that carries a calendar day.
///
/// Always rendered at midnight UTC with millisecond precision. Parsing
/// accepts any timestamp whose date segment is valid; the time of day is
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LedgerTime(OcfDate);

impl LedgerTime {
    /// Parses a ledger timestamp.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the date segment is invalid.
    pub fn parse(input: &str) -> TranslationResult<Self> {
        OcfDate::parse_lenient(input).map(Self)
    }

    /// Returns the calendar day.
    #[inline]
    #[must_use]
    pub const fn date(self) -> OcfDate {
        self.0
    }
}

impl fmt::Display for LedgerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, LEDGER_MIDNIGHT_SUFFIX)
    }
}

impl From<OcfDate> for LedgerTime {
    fn from(date: OcfDate) -> Self {
        Self(date)
    }
}

impl From<LedgerTime> for OcfDate {
    fn from(time: LedgerTime) -> Self {
        time.0
    }
}

impl Serialize for LedgerTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LedgerTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
