//! License timestamps and their RFC 3339 wire format.
//!
//! A timestamp keeps the UTC offset it was issued with, because the offset
//! is part of the signed bytes: `2019-02-03T12:33:02-05:00` must re-encode
//! exactly as written. Precision is whole seconds.

use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sub-second precision of license timestamps on the wire, e.g.
/// `2018-07-26T12:12:06-04:00`.
pub const TIMESTAMP_FORMAT: SecondsFormat = SecondsFormat::Secs;

/// An instant with its original UTC offset, truncated to seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Current time in UTC, truncated to seconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from any chrono instant, truncating sub-seconds.
    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(dt: DateTime<Tz>) -> Self {
        let fixed = dt.fixed_offset();
        Self(fixed.with_nanosecond(0).unwrap_or(fixed))
    }

    /// Parses RFC 3339 text. Sub-seconds are accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error if the text is not RFC 3339.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self::from_datetime)
    }

    /// Returns the instant in UTC.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// Returns the instant with its original offset.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Returns true if this instant is strictly after `other`.
    #[must_use]
    pub fn is_after(&self, other: &DateTime<Utc>) -> bool {
        self.0 > *other
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(TIMESTAMP_FORMAT, true))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(|e| {
            serde::de::Error::custom(format!("cannot parse license timestamp {text:?}: {e}"))
        })
    }
}
