//! Timestamped event logging (console + append-only file)

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Best-effort event logger.
///
/// Each event becomes one line, `{local timestamp}: {message}`, written to
/// stdout and appended to the log file. Sink failures are swallowed: a full
/// disk or unwritable log file must never take down the retry loop.
#[derive(Debug, Clone)]
pub struct EventLog {
    log_path: PathBuf,
}

impl EventLog {
    /// Create a logger appending to `log_path` (created on first write)
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// The append-only log file this logger writes to
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Log one event line to console and file
    pub fn log(&self, message: &str) {
        let line = format!("{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message);

        println!("{}", line);

        // Best effort only.
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| writeln!(file, "{}", line));
    }
}
