//! SyncAction - Replica mutations determined by the diff engine

use super::FileEntry;
use std::path::{Path, PathBuf};

/// One mutation to apply to the replica tree.
///
/// Actions are emitted by plan generation in phase order (additive before
/// destructive) and logged once each when executed. They are never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    /// Create a directory (replica root or a source directory missing in
    /// the replica)
    CreateDir(PathBuf),

    /// Copy a source file over the replica path (new or changed)
    CopyOrUpdate(FileEntry),

    /// Delete a replica file with no source counterpart
    DeleteFile(PathBuf),

    /// Recursively delete a replica directory with no source counterpart
    DeleteDir(PathBuf),
}

impl SyncAction {
    /// The relative path this action targets
    pub fn path(&self) -> &Path {
        match self {
            SyncAction::CreateDir(path)
            | SyncAction::DeleteFile(path)
            | SyncAction::DeleteDir(path) => path,
            SyncAction::CopyOrUpdate(entry) => &entry.path,
        }
    }

    /// Short label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            SyncAction::CreateDir(_) => "Created directory",
            SyncAction::CopyOrUpdate(_) => "Copied/Updated",
            SyncAction::DeleteFile(_) => "Deleted",
            SyncAction::DeleteDir(_) => "Deleted directory",
        }
    }

    /// True for the destructive phases (file and directory deletes)
    pub fn is_delete(&self) -> bool {
        matches!(self, SyncAction::DeleteFile(_) | SyncAction::DeleteDir(_))
    }
}
