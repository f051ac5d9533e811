//! Sequential directory walker

use crate::types::{FileEntry, MirrorTree, SyncError};
use std::path::Path;
use std::time::Instant;

/// Scan a directory and build a MirrorTree.
///
/// Walks the tree recursively and records every regular file (with size and
/// mtime), every directory, and every symlink by its path relative to
/// `root_path`. A mirror must see everything, so ignore-file filtering and
/// hidden-file skipping are disabled. Symlinks are not followed; they are
/// recorded path-only so replica-side orphans can still be removed.
///
/// # Errors
/// Any traversal or metadata failure aborts the scan with `SyncError::Walk`
/// carrying the offending path. The pass contract is all-or-nothing; the
/// caller retries the whole pass on the next tick.
pub fn scan_tree(root_path: &Path) -> Result<MirrorTree, SyncError> {
    let start_time = Instant::now();
    let mut tree = MirrorTree::new(root_path.to_path_buf());

    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false) // no .gitignore/.ignore semantics in a mirror
        .hidden(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = result.map_err(|e| walk_error(root_path, e))?;

        // The root itself is not an entry of its own tree.
        if entry.depth() == 0 {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(root_path)
            .map_err(|_| SyncError::Walk {
                path: entry.path().to_path_buf(),
                source: std::io::Error::other("entry is outside the scanned root"),
            })?
            .to_path_buf();

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue, // stdin-style entries cannot occur under a root
        };

        if file_type.is_dir() {
            tree.insert_dir(relative_path);
            continue;
        }

        if file_type.is_symlink() {
            tree.insert_link(relative_path);
            continue;
        }

        if !file_type.is_file() {
            // Special files (sockets, pipes) are not mirrored.
            continue;
        }

        let metadata = entry.metadata().map_err(|e| walk_error(entry.path(), e))?;

        let mtime = metadata.modified().map_err(|e| SyncError::Walk {
            path: entry.path().to_path_buf(),
            source: e,
        })?;

        let file_entry = FileEntry::new(relative_path.clone(), metadata.len(), mtime);
        tree.insert_file(relative_path, file_entry);
    }

    tree.set_scan_duration(start_time.elapsed());

    Ok(tree)
}

fn walk_error(path: &Path, error: ignore::Error) -> SyncError {
    let source = error
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("directory traversal failed"));
    SyncError::Walk {
        path: path.to_path_buf(),
        source,
    }
}
