//! Rewriting the event list embedded in the static page.
//!
//! The page carries its data as a script literal:
//!
//! ```text
//! const allEvents = [ ... ];
//! ```
//!
//! Only the first such marker is touched; the match stops at the first `];`.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::error::{ExpoError, ExpoResult};
use crate::event::Event;

static ALL_EVENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const allEvents = (\[.*?\]);").expect("allEvents pattern is valid")
});

/// Replace the `allEvents` blob with `events` as a JSON array.
///
/// Returns the page unchanged when it has no marker.
pub fn inject_events(html: &str, events: &[Event]) -> ExpoResult<String> {
    if !ALL_EVENTS.is_match(html) {
        log::debug!("No allEvents marker found, leaving page as is");
        return Ok(html.to_string());
    }

    let blob = serde_json::to_string(events).map_err(|e| ExpoError::Serialization(e.to_string()))?;
    let replacement = format!("const allEvents = {};", blob);

    Ok(ALL_EVENTS
        .replacen(html, 1, NoExpand(&replacement))
        .into_owned())
}

/// Read back the records currently embedded under the marker.
///
/// `None` when the page has no marker.
pub fn extract_events(html: &str) -> Option<ExpoResult<Vec<Event>>> {
    let blob = ALL_EVENTS.captures(html)?.get(1)?.as_str();
    Some(serde_json::from_str(blob).map_err(|e| ExpoError::Parse(e.to_string())))
}
