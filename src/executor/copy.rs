//! Atomic file copy implementation

use crate::types::SyncError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Copy a file atomically using the write-then-rename strategy.
///
/// 1. Write to a temporary `<name>.mirra-part` staging file
/// 2. Flush and sync to disk
/// 3. Preserve metadata (permissions, mtime)
/// 4. Atomic rename to the final destination
///
/// Parent directories of `dest` are created as needed. If `dest` exists it
/// is overwritten; if a directory occupies `dest` (the source path changed
/// kind) it is removed first.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(SyncError)` - the failure, carrying the destination path
pub fn copy_file_atomic(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    let fail = |source: std::io::Error| SyncError::Copy {
        path: dest.to_path_buf(),
        source,
    };

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    // symlink_metadata does not follow links, so a symlink at dest is
    // removed as a link rather than deleted through to its target.
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dest).map_err(fail)?,
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(dest).map_err(fail)?,
        _ => {}
    }

    // Appended to the full file name, so `a.txt` stages as
    // `a.txt.mirra-part` and cannot clobber a sibling `a.mirra-part`.
    let file_name = dest
        .file_name()
        .ok_or_else(|| fail(std::io::Error::other("destination has no file name")))?;
    let mut part_name = file_name.to_os_string();
    part_name.push(".mirra-part");
    let part_path = dest.with_file_name(part_name);

    let mut src_file = File::open(src).map_err(fail)?;
    let mut part_file = File::create(&part_path).map_err(fail)?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(fail)?;

        if bytes_read == 0 {
            break; // EOF
        }

        part_file.write_all(&buffer[0..bytes_read]).map_err(fail)?;
        total_bytes += bytes_read as u64;
    }

    part_file.sync_all().map_err(fail)?;

    // Drop the file handle before rename (required on Windows)
    drop(part_file);

    let src_metadata = fs::metadata(src).map_err(fail)?;

    fs::set_permissions(&part_path, src_metadata.permissions()).map_err(fail)?;

    // Carrying the source mtime across is what lets the next pass's
    // equality oracle short-circuit on the timestamp tier.
    let mtime = src_metadata.modified().map_err(fail)?;
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(&part_path, filetime_mtime).map_err(fail)?;

    // Atomic on POSIX systems (single syscall)
    fs::rename(&part_path, dest).map_err(fail)?;

    Ok(total_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_basic() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, b"payload").expect("write src");

        let bytes = copy_file_atomic(&src, &dest).expect("copy should succeed");

        assert_eq!(bytes, 7);
        assert_eq!(fs::read(&dest).expect("read dest"), b"payload");
        assert!(!dir.path().join("dest.txt.mirra-part").exists());
    }

    #[test]
    fn test_copy_creates_parent_directories() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("deep/nested/dest.txt");
        fs::write(&src, b"x").expect("write src");

        copy_file_atomic(&src, &dest).expect("copy should succeed");

        assert!(dest.exists());
    }

    #[test]
    fn test_copy_overwrites_existing_file() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, b"new").expect("write src");
        fs::write(&dest, b"old-content").expect("write dest");

        copy_file_atomic(&src, &dest).expect("copy should succeed");

        assert_eq!(fs::read(&dest).expect("read dest"), b"new");
    }

    #[test]
    fn test_copy_replaces_directory_at_destination() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("was-a-dir");
        fs::write(&src, b"file-now").expect("write src");
        fs::create_dir(&dest).expect("create blocking dir");
        fs::write(dest.join("stale.txt"), b"stale").expect("write stale");

        copy_file_atomic(&src, &dest).expect("copy should replace the directory");

        assert!(dest.is_file());
        assert_eq!(fs::read(&dest).expect("read dest"), b"file-now");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_replaces_symlink_at_destination() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let target = dir.path().join("target.txt");
        let dest = dir.path().join("was-a-link");
        fs::write(&src, b"file-now").expect("write src");
        fs::write(&target, b"pointed-at").expect("write target");
        std::os::unix::fs::symlink(&target, &dest).expect("create symlink");

        copy_file_atomic(&src, &dest).expect("copy should replace the link");

        let meta = fs::symlink_metadata(&dest).expect("stat dest");
        assert!(meta.is_file(), "dest must be a regular file, not a link");
        assert_eq!(fs::read(&dest).expect("read dest"), b"file-now");
        // the link target itself is untouched
        assert_eq!(fs::read(&target).expect("read target"), b"pointed-at");
    }

    #[test]
    fn test_staging_does_not_clobber_part_named_sibling() {
        // Staging `a.txt` must leave an already-mirrored `a.mirra-part`
        // sibling untouched.
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("a.txt");
        let dest_dir = dir.path().join("replica");
        fs::create_dir(&dest_dir).expect("create replica dir");
        fs::write(&src, b"payload").expect("write src");
        fs::write(dest_dir.join("a.mirra-part"), b"sibling").expect("write sibling");

        copy_file_atomic(&src, &dest_dir.join("a.txt")).expect("copy should succeed");

        assert_eq!(
            fs::read(dest_dir.join("a.mirra-part")).expect("read sibling"),
            b"sibling"
        );
        assert_eq!(fs::read(dest_dir.join("a.txt")).expect("read dest"), b"payload");
    }

    #[test]
    fn test_copy_preserves_mtime() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, b"payload").expect("write src");

        let pinned = filetime::FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, pinned).expect("pin src mtime");

        copy_file_atomic(&src, &dest).expect("copy should succeed");

        let src_mtime = fs::metadata(&src).unwrap().modified().unwrap();
        let dest_mtime = fs::metadata(&dest).unwrap().modified().unwrap();
        assert_eq!(src_mtime, dest_mtime);
    }

    #[test]
    fn test_copy_missing_source_fails_with_dest_path() {
        let dir = TempDir::new().expect("create tempdir");
        let src = dir.path().join("missing.txt");
        let dest = dir.path().join("dest.txt");

        let err = copy_file_atomic(&src, &dest).expect_err("copy should fail");
        assert_eq!(err.path(), Some(dest.as_path()));
    }
}
