//! Configuration management

use crate::types::SyncError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line interface: four positional arguments, no flags.
#[derive(Parser, Debug)]
#[command(
    name = "mirra",
    version,
    about = "One-way periodic folder mirroring",
    long_about = "Mirrors SOURCE onto REPLICA every INTERVAL_SECS seconds, \
                  logging every action to the console and LOG_FILE."
)]
pub struct Cli {
    /// Directory to mirror from
    pub source: PathBuf,

    /// Directory to mirror onto (created if missing)
    pub replica: PathBuf,

    /// Seconds between synchronization passes (positive integer)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Append-only log file path
    pub log_file: PathBuf,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Replica directory
    pub replica: PathBuf,

    /// Interval between passes
    pub interval: Duration,

    /// Append-only log file
    pub log_file: PathBuf,
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Self {
            source: cli.source,
            replica: cli.replica,
            interval: Duration::from_secs(cli.interval_secs),
            log_file: cli.log_file,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Validate configuration before the loop is entered
    pub fn validate(&self) -> Result<(), SyncError> {
        if !self.source.is_dir() {
            return Err(SyncError::Config(format!(
                "Source folder does not exist: {}",
                self.source.display()
            )));
        }

        if self.source == self.replica {
            return Err(SyncError::Config(
                "Source and replica cannot be the same directory".to_string(),
            ));
        }

        // A nested pair would make every pass feed on its own output.
        if self.replica.starts_with(&self.source) {
            return Err(SyncError::Config(
                "Replica cannot be inside the source directory".to_string(),
            ));
        }
        if self.source.starts_with(&self.replica) {
            return Err(SyncError::Config(
                "Source cannot be inside the replica directory".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(SyncError::Config(
                "Invalid interval. Must be a positive integer.".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(source: PathBuf, replica: PathBuf) -> Config {
        Config {
            source,
            replica,
            interval: Duration::from_secs(5),
            log_file: PathBuf::from("sync.log"),
        }
    }

    #[test]
    fn test_valid_config() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");

        let cfg = config(src.path().to_path_buf(), dst.path().to_path_buf());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let dst = TempDir::new().expect("create dst tempdir");

        let cfg = config(PathBuf::from("/nonexistent/mirra-src"), dst.path().to_path_buf());
        let err = cfg.validate().expect_err("missing source must fail");
        assert!(err.is_config_error());
        assert!(err.to_string().contains("Source folder does not exist"));
    }

    #[test]
    fn test_same_source_and_replica_is_rejected() {
        let dir = TempDir::new().expect("create tempdir");

        let cfg = config(dir.path().to_path_buf(), dir.path().to_path_buf());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_nested_replica_is_rejected() {
        let src = TempDir::new().expect("create src tempdir");

        let cfg = config(src.path().to_path_buf(), src.path().join("replica"));
        let err = cfg.validate().expect_err("nested replica must fail");
        assert!(err.to_string().contains("inside the source"));
    }

    #[test]
    fn test_nested_source_is_rejected() {
        let dst = TempDir::new().expect("create dst tempdir");
        let src = dst.path().join("src");
        std::fs::create_dir(&src).expect("create nested src");

        let cfg = config(src, dst.path().to_path_buf());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");

        let mut cfg = config(src.path().to_path_buf(), dst.path().to_path_buf());
        cfg.interval = Duration::ZERO;
        let err = cfg.validate().expect_err("zero interval must fail");
        assert!(err.to_string().contains("Invalid interval"));
    }

    #[test]
    fn test_cli_conversion_validates() {
        let src = TempDir::new().expect("create src tempdir");
        let dst = TempDir::new().expect("create dst tempdir");

        let cli = Cli {
            source: src.path().to_path_buf(),
            replica: dst.path().to_path_buf(),
            interval_secs: 30,
            log_file: PathBuf::from("sync.log"),
        };

        let cfg = Config::try_from(cli).expect("conversion should validate");
        assert_eq!(cfg.interval, Duration::from_secs(30));
    }
}
