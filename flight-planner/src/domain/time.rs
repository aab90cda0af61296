//! Timestamp handling for flight data.
//!
//! Flight records carry local timestamps in `YYYY-MM-DDTHH:MM:SS` form with no
//! zone information. This module wraps them in a type that parses and prints
//! exactly that form, and provides the elapsed-time helpers the planner needs.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;

/// The only accepted timestamp layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimeError {
    input: String,
}

/// A departure or arrival timestamp.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::FlightTime;
///
/// let t = FlightTime::parse("2021-09-01T23:20:00").unwrap();
/// assert_eq!(t.to_string(), "2021-09-01T23:20:00");
///
/// assert!(FlightTime::parse("2021-09-01 23:20:00").is_err());
/// assert!(FlightTime::parse("2021-09-31T10:00:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightTime(NaiveDateTime);

impl FlightTime {
    /// Wrap an already-parsed datetime.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| TimeError {
                input: s.to_string(),
            })
    }

    /// Returns the underlying datetime.
    pub fn to_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl Sub for FlightTime {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.signed_duration_since(rhs)
    }
}

impl fmt::Debug for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightTime({})", self)
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for FlightTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FlightTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        FlightTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Number of whole elapsed days in a duration, rounding towards negative
/// infinity. A gap of 2 days and 23 hours counts as 2 days; a gap of minus
/// one second counts as -1.
pub fn whole_days(duration: Duration) -> i64 {
    duration.num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Format a duration as `H:MM:SS`.
///
/// Hours are not wrapped at a day boundary, so a 26.5 hour trip prints as
/// `26:30:00`. Sub-second precision is dropped.
///
/// ```
/// use chrono::Duration;
/// use flight_planner::domain::format_hms;
///
/// assert_eq!(format_hms(Duration::minutes(95)), "1:35:00");
/// assert_eq!(format_hms(Duration::hours(49) + Duration::seconds(7)), "49:00:07");
/// ```
pub fn format_hms(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{sign}{hours}:{minutes:02}:{seconds:02}")
}
