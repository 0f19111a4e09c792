//! ICS file generation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::event::Event;

/// Calendar-level identity written into every generated file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarMetadata {
    pub prodid: String,
    /// Appended to every UID after an `@`
    pub uid_domain: String,
}

impl Default for CalendarMetadata {
    fn default() -> Self {
        CalendarMetadata {
            prodid: "-//ExpoApp//London Expos//EN".to_string(),
            uid_domain: "expoapp".to_string(),
        }
    }
}

/// Escape a TEXT value per RFC 5545.
///
/// Backslash goes first so the escapes inserted afterwards stay single.
pub fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Compact UTC form, e.g. 20250320T150000Z
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Fresh random UID, e.g. 0d8c...@expoapp
pub fn generate_uid(domain: &str) -> String {
    format!("{}@{}", uuid::Uuid::new_v4(), domain)
}

/// Generate a full calendar for `events`, one VEVENT each.
///
/// `dtstamp` is shared by every VEVENT in the file. Lines are joined with a
/// bare line feed and the output has no trailing newline.
pub fn generate_ics(events: &[Event], metadata: &CalendarMetadata, dtstamp: DateTime<Utc>) -> String {
    let dtstamp = format_utc(dtstamp);

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", metadata.prodid),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        let start = match event.start_utc() {
            Ok(start) => start,
            Err(e) => {
                log::warn!("Leaving '{}' out of the calendar: {}", event.title, e);
                continue;
            }
        };

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", generate_uid(&metadata.uid_domain)));
        lines.push(format!("DTSTAMP:{}", dtstamp));
        lines.push(format!("DTSTART:{}", format_utc(start)));

        // DTEND is optional in a VEVENT, so a bad end only drops the line
        match event.end_utc() {
            Ok(end) => lines.push(format!("DTEND:{}", format_utc(end))),
            Err(e) => log::warn!("No DTEND for '{}': {}", event.title, e),
        }

        let description = format!("{} — {}", event.title, event.url());
        lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
        lines.push(format!("LOCATION:{}", escape_text(event.venue())));
        lines.push(format!("DESCRIPTION:{}", escape_text(description.trim())));
        lines.push(format!("URL:{}", escape_text(event.url())));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}
