//! Core type definitions for mirra

mod action;
mod entry;
mod error;
mod tree;

pub use action::SyncAction;
pub use entry::FileEntry;
pub use error::SyncError;
pub use tree::MirrorTree;
