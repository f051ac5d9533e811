//! Content digests for the equality oracle's hash tier.

use crate::types::SyncError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

const READ_BUF_SIZE: usize = 64 * 1024;

/// Digest a file's contents with Blake3.
///
/// `blake3::Hasher` is an `io::Write` sink, so the file is streamed into it
/// through a 64KB buffered reader and memory use stays flat regardless of
/// file size.
///
/// # Errors
/// Returns `SyncError::Io` if the file cannot be opened or read.
pub fn compute_hash(path: &Path) -> Result<[u8; 32], SyncError> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(READ_BUF_SIZE, file);

    let mut hasher = blake3::Hasher::new();
    io::copy(&mut reader, &mut hasher)?;

    Ok(*hasher.finalize().as_bytes())
}
