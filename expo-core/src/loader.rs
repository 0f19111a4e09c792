//! Reading the events file.

use std::path::{Path, PathBuf};

use crate::error::{ExpoError, ExpoResult};
use crate::event::Event;

/// Where the events file is looked for, relative to the working directory
pub const DEFAULT_INPUT_CANDIDATES: &[&str] = &["events.json", "data/events.json"];

/// Return the first candidate that exists on disk.
pub fn locate_input<P: AsRef<Path>>(candidates: &[P]) -> ExpoResult<PathBuf> {
    candidates
        .iter()
        .map(|c| c.as_ref())
        .find(|c| c.exists())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ExpoError::InputNotFound(candidates.iter().map(|c| c.as_ref().to_path_buf()).collect())
        })
}

/// Parse an events document: a JSON array of records, order preserved.
pub fn parse_events(content: &str) -> ExpoResult<Vec<Event>> {
    serde_json::from_str(content).map_err(|e| ExpoError::Parse(e.to_string()))
}

/// Read and parse the events file at `path`.
pub fn load_events(path: &Path) -> ExpoResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
