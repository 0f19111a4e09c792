//! Core logic for expo-build.
//!
//! Everything in this crate is free of side effects apart from the loader:
//! - `event` holds the record type and timestamp parsing
//! - `window` selects the records that fall in the publishing window
//! - `ics` and `html` render the selected records into the two artifacts

pub mod error;
pub mod event;
pub mod html;
pub mod ics;
pub mod loader;
pub mod window;

pub use error::{ExpoError, ExpoResult};
pub use event::Event;
pub use window::{WINDOW_DAYS, Window};
