//! Error types for expo-build.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the outputs.
#[derive(Error, Debug)]
pub enum ExpoError {
    #[error("No events file found (tried: {})", display_paths(.0))]
    InputNotFound(Vec<PathBuf>),

    #[error("Events file parse error: {0}")]
    Parse(String),

    #[error("Invalid timestamp '{0}'")]
    Timestamp(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for expo-build operations.
pub type ExpoResult<T> = Result<T, ExpoError>;
