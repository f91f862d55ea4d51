//! `--version` and `--help`.

use crate::config::{ENV_API_KEY, ENV_BACKEND_URL, ENV_CONFIG_PATH, ENV_TIMEOUT_SECS, ENV_VIEWER_URL};
use crate::logging::{ENV_LOG_DIR, ENV_LOG_FILTER};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("folio {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{version}
Browse a hosted music library from the terminal.

USAGE:
    folio [--demo] [--dump]

OPTIONS:
    --demo          Use the built-in sample library instead of the backend
    --dump          Load once, print the library tree and exit
    -V, --version   Print version
    -h, --help      Print this help

ENVIRONMENT:
    {backend:<20}Backend project URL
    {key:<20}API key sent with every request
    {viewer:<20}Document viewer template containing {{url}}
    {timeout:<20}Request timeout in seconds
    {config:<20}Path of the JSON config file
    {log:<20}Log filter (default folio=info)
    {log_dir:<20}Directory for folio.log",
        version = version_text(),
        backend = ENV_BACKEND_URL,
        key = ENV_API_KEY,
        viewer = ENV_VIEWER_URL,
        timeout = ENV_TIMEOUT_SECS,
        config = ENV_CONFIG_PATH,
        log = ENV_LOG_FILTER,
        log_dir = ENV_LOG_DIR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_text().starts_with("folio "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        let usage = usage_text();
        for flag in ["--demo", "--dump", "--version", "--help", "FOLIO_BACKEND_URL", "{url}"] {
            assert!(usage.contains(flag), "missing {flag}");
        }
    }
}
