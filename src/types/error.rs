//! Error types for mirra

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for mirra operations.
///
/// Pass-boundary failures carry the offending path and the underlying
/// cause; a pass returns the first such error and is retried wholesale on
/// the next tick.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory enumeration failed
    #[error("Failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a file into the replica failed
    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Removing a replica entry failed
    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating a replica directory failed
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// The path the failing operation targeted, if the error carries one
    pub fn path(&self) -> Option<&Path> {
        match self {
            SyncError::Walk { path, .. }
            | SyncError::Copy { path, .. }
            | SyncError::Delete { path, .. }
            | SyncError::CreateDir { path, .. } => Some(path),
            SyncError::Io(_) | SyncError::Config(_) => None,
        }
    }

    /// Check if this error is a startup validation error
    pub fn is_config_error(&self) -> bool {
        matches!(self, SyncError::Config(_))
    }
}
