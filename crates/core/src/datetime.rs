//! DateTime value object: an instant with millisecond precision.

use core::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const DISPLAY_FORMAT: &str = "%B %-d, %Y, %I:%M %p";

/// Point in time, always normalised to UTC and truncated to milliseconds.
///
/// Equality and ordering compare the underlying instants exactly. The
/// [`Display`](core::fmt::Display) rendering is for people only; persist and
/// compare through [`DateTime::to_iso_string`] or the instant itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(chrono::DateTime<Utc>);

impl DateTime {
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }

    pub fn from_instant(instant: chrono::DateTime<Utc>) -> Self {
        let millis_only = instant.nanosecond() / 1_000_000 * 1_000_000;
        Self(instant.with_nanosecond(millis_only).unwrap_or(instant))
    }

    /// Parse a date-like string.
    ///
    /// Accepted, in order:
    /// - RFC 3339 with any offset (`2023-10-05T16:48:00+02:00`), converted to UTC
    /// - a local timestamp without offset (`2023-10-05T14:48:00.123`), read as UTC
    /// - a bare date (`2023-10-05`), read as UTC midnight
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::from_instant(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self::from_instant(naive.and_utc()));
        }
        if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Self::from_instant(midnight.and_utc()));
        }

        Err(DomainError::validation(
            "date",
            format!("Invalid date: {value}"),
        ))
    }

    pub fn as_instant(&self) -> chrono::DateTime<Utc> {
        self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Strict ISO-8601 UTC rendering, e.g. `2023-10-05T14:48:00.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }
}

impl ValueObject for DateTime {}

impl Default for DateTime {
    fn default() -> Self {
        Self::now()
    }
}

/// Human-readable rendering, e.g. `October 5, 2023, 02:48 PM` (UTC).
impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(value: chrono::DateTime<Utc>) -> Self {
        Self::from_instant(value)
    }
}

impl FromStr for DateTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateTime {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.to_iso_string()
    }
}
