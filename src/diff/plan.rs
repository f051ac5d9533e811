//! Sync plan generation

use crate::diff::{files_equal, DiffPlan};
use crate::types::{MirrorTree, SyncAction, SyncError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Generate the plan that makes the replica tree match the source tree.
///
/// Phases are emitted in this order and must execute in this order:
///
/// 1. `CreateDir` for source directories missing under the replica (this
///    mirrors empty directories too).
/// 2. `CopyOrUpdate` for source files missing from the replica or judged
///    unequal by the oracle. Equal pairs are counted as skips.
/// 3. `DeleteFile` for replica files and symlinks with no same-path source
///    file or directory. Symlinks are never copied, so a replica link is an
///    orphan unless the source claims its path with a mirrored entry.
/// 4. `DeleteDir` for top-most replica directories with no same-path source
///    entry; the recursive delete covers nested orphans, so descendants of
///    a planned delete are suppressed.
///
/// A replica entry whose source counterpart changed kind (file vs
/// directory) is replaced by phase 1 or 2 rather than deleted; phases 3 and
/// 4 skip such paths.
///
/// The oracle may hash file contents, so generation can fail with an IO
/// error; the whole pass is abandoned and retried in that case.
pub fn generate_sync_plan(
    src_tree: &MirrorTree,
    replica_tree: &MirrorTree,
) -> Result<DiffPlan, SyncError> {
    let mut plan = DiffPlan::new();

    // Phase 1: directories to create
    for dir in src_tree.iter_dirs() {
        if !replica_tree.contains_dir(dir) {
            plan.add_action(SyncAction::CreateDir(dir.clone()));
        }
    }

    // Phase 2: files to copy or update
    for (path, src_entry) in src_tree.iter_files() {
        match replica_tree.get_file(path) {
            None => plan.add_action(SyncAction::CopyOrUpdate(src_entry.clone())),
            Some(replica_entry) => {
                if files_equal(
                    &src_tree.root_path,
                    &replica_tree.root_path,
                    src_entry,
                    replica_entry,
                )? {
                    plan.record_skip();
                } else {
                    plan.add_action(SyncAction::CopyOrUpdate(src_entry.clone()));
                }
            }
        }
    }

    // Phase 3: orphaned replica files and symlinks
    for (path, _replica_entry) in replica_tree.iter_files() {
        if !src_tree.contains_file(path) && !src_tree.contains_dir(path) {
            plan.add_action(SyncAction::DeleteFile(path.clone()));
        }
    }

    for link in replica_tree.iter_links() {
        if !src_tree.contains_file(link) && !src_tree.contains_dir(link) {
            plan.add_action(SyncAction::DeleteFile(link.clone()));
        }
    }

    // Phase 4: orphaned replica directories (top-most only)
    let orphan_dirs: HashSet<&PathBuf> = replica_tree
        .iter_dirs()
        .filter(|dir| !src_tree.contains_dir(dir) && !src_tree.contains_file(dir))
        .collect();

    for dir in &orphan_dirs {
        if !is_covered_by_orphan_ancestor(dir, &orphan_dirs) {
            plan.add_action(SyncAction::DeleteDir((*dir).clone()));
        }
    }

    plan.sort_each_phase();

    Ok(plan)
}

fn is_covered_by_orphan_ancestor(path: &Path, orphan_dirs: &HashSet<&PathBuf>) -> bool {
    path.ancestors().skip(1).any(|ancestor| {
        !ancestor.as_os_str().is_empty() && orphan_dirs.contains(&ancestor.to_path_buf())
    })
}
