//! Calendar (.ics) generation for the publishing window.

mod generate;

pub use generate::{CalendarMetadata, escape_text, format_utc, generate_ics, generate_uid};
