//! Executor module for replica mutations

pub mod copy;

use crate::diff::DiffPlan;
use crate::types::{SyncAction, SyncError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub use copy::copy_file_atomic;

/// Execution statistics for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Number of actions in the input plan.
    pub total_actions: usize,
    /// Number of executed actions (equals total on success).
    pub completed_actions: usize,
    /// Aggregate copied bytes.
    pub bytes_copied: u64,
}

/// Callback invoked once per successfully executed action. The lifetime
/// lets callers pass closures that borrow pass-local state such as the log.
pub type ActionCallback<'a> = dyn Fn(&SyncAction) + 'a;

/// Execute a sync plan against the replica root.
///
/// Actions run strictly in plan order (additive phases first); the first
/// failure aborts the rest of the pass and is returned with the offending
/// path. There is no per-action recovery: the pass is idempotent and the
/// scheduler simply reruns it from a fresh scan on the next tick.
pub fn execute_plan(
    plan: &DiffPlan,
    src_root: &Path,
    replica_root: &Path,
    on_action: Option<&ActionCallback<'_>>,
) -> Result<ExecutionStats, SyncError> {
    let mut stats = ExecutionStats {
        total_actions: plan.actions.len(),
        ..Default::default()
    };

    for action in &plan.actions {
        let bytes = execute_action(action, src_root, replica_root)?;

        stats.completed_actions += 1;
        stats.bytes_copied += bytes;

        if let Some(callback) = on_action {
            callback(action);
        }
    }

    Ok(stats)
}

fn execute_action(
    action: &SyncAction,
    src_root: &Path,
    replica_root: &Path,
) -> Result<u64, SyncError> {
    match action {
        SyncAction::CreateDir(path) => {
            create_replica_dir(&replica_root.join(path), path)?;
            Ok(0)
        }
        SyncAction::CopyOrUpdate(entry) => {
            let src_path = src_root.join(&entry.path);
            let dest_path = replica_root.join(&entry.path);
            copy_file_atomic(&src_path, &dest_path)
        }
        SyncAction::DeleteFile(path) => {
            delete_replica_file(&replica_root.join(path), path)?;
            Ok(0)
        }
        SyncAction::DeleteDir(path) => {
            delete_replica_dir(&replica_root.join(path), path)?;
            Ok(0)
        }
    }
}

fn create_replica_dir(full_path: &Path, rel_path: &Path) -> Result<(), SyncError> {
    // A file or symlink occupying the path means the source changed kind;
    // replace it. symlink_metadata keeps a link-to-dir from passing as the
    // directory we are about to create.
    if let Ok(meta) = fs::symlink_metadata(full_path) {
        if !meta.is_dir() {
            fs::remove_file(full_path).map_err(|e| SyncError::CreateDir {
                path: rel_path.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::create_dir_all(full_path).map_err(|e| SyncError::CreateDir {
        path: rel_path.to_path_buf(),
        source: e,
    })
}

fn delete_replica_file(full_path: &Path, rel_path: &Path) -> Result<(), SyncError> {
    match fs::remove_file(full_path) {
        Ok(()) => Ok(()),
        // Already gone (removed with a replaced ancestor) counts as done.
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SyncError::Delete {
            path: rel_path.to_path_buf(),
            source: e,
        }),
    }
}

fn delete_replica_dir(full_path: &Path, rel_path: &Path) -> Result<(), SyncError> {
    match fs::remove_dir_all(full_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SyncError::Delete {
            path: rel_path.to_path_buf(),
            source: e,
        }),
    }
}
