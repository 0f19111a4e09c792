//! Event records as maintained in the events file.
//!
//! Records are kept close to their on-disk form: timestamps stay as text and
//! are only parsed when a component needs the instant. Unknown keys are
//! carried along so the HTML blob mirrors the input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ExpoError, ExpoResult};

/// A single expo listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// ISO-8601 start, offset optional (UTC when absent). Missing or null
    /// reads as empty, which never parses.
    #[serde(default, deserialize_with = "nullable_string")]
    pub start: String,
    /// ISO-8601 end, offset optional (UTC when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Any other keys on the record, preserved for the HTML blob
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    pub fn new(title: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Event {
            title: title.into(),
            start: start.into(),
            end: Some(end.into()),
            venue: None,
            url: None,
            extra: Map::new(),
        }
    }

    pub fn venue(&self) -> &str {
        self.venue.as_deref().unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    pub fn start_utc(&self) -> ExpoResult<DateTime<Utc>> {
        parse_timestamp(&self.start)
    }

    pub fn end_utc(&self) -> ExpoResult<DateTime<Utc>> {
        parse_timestamp(self.end.as_deref().unwrap_or(""))
    }
}

/// Layouts with an offset, tried after RFC 3339. `%#z` takes `+01`, `+0100`
/// and `+01:00`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%#z",
    "%Y%m%dT%H%M%#z",
];

/// Offset-less layouts, tried in order. All are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Accepts an explicit offset or `Z` suffix, an offset-less date-time (taken
/// as UTC), or a bare date (midnight UTC). Extended and basic forms both
/// work, down to hour precision.
pub fn parse_timestamp(s: &str) -> ExpoResult<DateTime<Utc>> {
    let trimmed = s.trim();
    let normalized = with_minutes(&zulu_to_offset(trimmed));
    let s = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
    }

    Err(ExpoError::Timestamp(trimmed.to_string()))
}

/// `...Z` becomes `...+00:00`
fn zulu_to_offset(s: &str) -> String {
    match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    }
}

/// `2025-03-20T15` and `2025-03-20T15+01:00` have no minutes; add `:00`.
fn with_minutes(s: &str) -> String {
    let bytes = s.as_bytes();
    let hour_only = bytes.len() >= 13
        && matches!(bytes[10], b'T' | b' ')
        && bytes[11].is_ascii_digit()
        && bytes[12].is_ascii_digit()
        && (bytes.len() == 13 || matches!(bytes[13], b'+' | b'-'));

    if hour_only {
        format!("{}:00{}", &s[..13], &s[13..])
    } else {
        s.to_string()
    }
}
