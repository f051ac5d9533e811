//! # mirra - One-Way Folder Mirroring
//!
//! Converge the replica, every tick.
//!
//! A periodic one-directional synchronizer: each pass makes a replica
//! directory tree match a source tree, copying new and changed files and
//! removing everything the source no longer has.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod hash;
pub mod logging;
pub mod scanner;
pub mod scheduler;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use types::{FileEntry, MirrorTree, SyncAction, SyncError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
