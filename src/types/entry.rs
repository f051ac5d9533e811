//! FileEntry - Represents a single file in a scanned tree

use std::path::PathBuf;
use std::time::SystemTime;

/// A regular file discovered under a tree root.
///
/// The relative path is the file's only identity; entries are rebuilt from
/// a fresh scan on every pass and never cached across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path from the tree root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time as reported by the filesystem (UTC-based)
    pub mtime: SystemTime,
}

impl FileEntry {
    /// Create a new FileEntry with the given parameters
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self { path, size, mtime }
    }
}
