//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a file. One-shot commands
//! (`--dump`) log to stderr. The filter comes from `FOLIO_LOG` and defaults
//! to `folio=info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FILTER: &str = "FOLIO_LOG";
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";
const DEFAULT_FILTER: &str = "folio=info";
const LOG_FILE_NAME: &str = "folio.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Directory for the log file: `FOLIO_LOG_DIR`, else `<data dir>/folio`.
pub fn log_dir() -> Option<PathBuf> {
    std::env::var(ENV_LOG_DIR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_local_dir().map(|d| d.join("folio")))
}

/// The file target for interactive runs, if a data directory exists.
pub fn default_file_target() -> Option<LogTarget> {
    log_dir().map(|dir| LogTarget::File(dir.join(LOG_FILE_NAME)))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Returns an error if the log file cannot be created. A subscriber that is
/// already installed (tests, repeated calls) is left in place.
pub fn init_logging(target: LogTarget) -> std::io::Result<()> {
    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_dir_from_env() {
        std::env::set_var(ENV_LOG_DIR, "/tmp/folio-logs");
        assert_eq!(log_dir(), Some(PathBuf::from("/tmp/folio-logs")));
        assert_eq!(
            default_file_target(),
            Some(LogTarget::File(PathBuf::from("/tmp/folio-logs/folio.log")))
        );
        std::env::remove_var(ENV_LOG_DIR);
    }

    #[test]
    fn test_init_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("folio.log");
        init_logging(LogTarget::File(path.clone())).unwrap();
        assert!(path.exists());
    }
}
