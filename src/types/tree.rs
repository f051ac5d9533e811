//! MirrorTree - Snapshot of one directory tree

use super::FileEntry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Snapshot of a directory tree, keyed by relative path.
///
/// Files carry size/mtime metadata; directories are tracked as a plain set
/// so the reconciler can mirror empty directories and remove orphaned ones.
/// Symlinks are recorded path-only: they are never copied, but a replica
/// link with no source entry at its path still counts as a deletable
/// orphan.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorTree {
    /// Map: relative_path -> FileEntry
    pub files: HashMap<PathBuf, FileEntry>,

    /// Set of relative directory paths (the root itself is not included)
    pub dirs: HashSet<PathBuf>,

    /// Set of relative symlink paths (targets are not resolved)
    pub links: HashSet<PathBuf>,

    /// Aggregate statistics
    pub total_size: u64,
    pub total_files: usize,

    /// Scan metadata
    pub scan_duration: Duration,
    pub root_path: PathBuf,
}

impl MirrorTree {
    /// Create a new empty MirrorTree
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            files: HashMap::new(),
            dirs: HashSet::new(),
            links: HashSet::new(),
            total_size: 0,
            total_files: 0,
            scan_duration: Duration::from_secs(0),
            root_path,
        }
    }

    /// Insert a file entry into the tree
    ///
    /// Updates aggregate statistics. If the path already exists, the old
    /// entry is replaced and statistics are adjusted.
    pub fn insert_file(&mut self, path: PathBuf, entry: FileEntry) {
        if let Some(old_entry) = self.files.get(&path) {
            self.total_size = self.total_size.saturating_sub(old_entry.size);
            self.total_files = self.total_files.saturating_sub(1);
        }

        self.total_size += entry.size;
        self.total_files += 1;
        self.files.insert(path, entry);
    }

    /// Record a directory at the given relative path
    pub fn insert_dir(&mut self, path: PathBuf) {
        self.dirs.insert(path);
    }

    /// Record a symlink at the given relative path
    pub fn insert_link(&mut self, path: PathBuf) {
        self.links.insert(path);
    }

    /// Get a file entry by relative path
    pub fn get_file(&self, path: &Path) -> Option<&FileEntry> {
        self.files.get(path)
    }

    /// Check if a file exists in the tree at the given relative path
    pub fn contains_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Check if a directory exists in the tree at the given relative path
    pub fn contains_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    /// Check if a symlink exists in the tree at the given relative path
    pub fn contains_link(&self, path: &Path) -> bool {
        self.links.contains(path)
    }

    /// Number of file entries in the tree
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the tree has no files, directories, or symlinks
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty() && self.links.is_empty()
    }

    /// Iterator over all file entries (path, FileEntry pairs)
    pub fn iter_files(&self) -> impl Iterator<Item = (&PathBuf, &FileEntry)> {
        self.files.iter()
    }

    /// Iterator over all relative directory paths
    pub fn iter_dirs(&self) -> impl Iterator<Item = &PathBuf> {
        self.dirs.iter()
    }

    /// Iterator over all relative symlink paths
    pub fn iter_links(&self) -> impl Iterator<Item = &PathBuf> {
        self.links.iter()
    }

    /// Set the scan duration after scanning completes
    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }
}
