//! File equality oracle

use crate::hash::compute_hash;
use crate::types::{FileEntry, SyncError};
use std::path::Path;

/// Decide whether a source file and its replica counterpart are identical.
///
/// Tiered comparison, cheapest check first:
///
/// 1. **Size**: different lengths are never equal; no further I/O.
/// 2. **Mtime**: equal recorded modification times are trusted as "already
///    copied" without reading content. A same-length, same-mtime pair whose
///    bytes were changed by timestamp-preserving tooling is therefore
///    skipped; the inverse (touched but unchanged) costs one hash pass.
/// 3. **Content**: differing mtimes with matching lengths fall back to a
///    full Blake3 digest of both files.
///
/// Both entries must describe existing regular files; `src_root` and
/// `replica_root` anchor their relative paths for the content tier.
pub fn files_equal(
    src_root: &Path,
    replica_root: &Path,
    src: &FileEntry,
    replica: &FileEntry,
) -> Result<bool, SyncError> {
    // Tier 1: size mismatch = definitely different
    if src.size != replica.size {
        return Ok(false);
    }

    // Tier 2: equal mtime = treated as unchanged, content never read
    if src.mtime == replica.mtime {
        return Ok(true);
    }

    // Tier 3: content digest
    let src_hash = compute_hash(&src_root.join(&src.path))?;
    let replica_hash = compute_hash(&replica_root.join(&replica.path))?;

    Ok(src_hash == replica_hash)
}
