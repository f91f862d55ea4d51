//! Runtime configuration.
//!
//! Sources are layered, later wins: built-in defaults, an optional JSON file,
//! then environment variables.
//!
//! ```ignore
//! use folio::config::Config;
//!
//! let config = Config::load()?
//!     .with_request_timeout_secs(10)
//!     .with_demo_mode(false);
//! config.validate()?;
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document viewer used for inline and modal previews. `{url}` is replaced
/// with the percent-encoded file URL.
pub const DEFAULT_VIEWER_URL: &str = "https://docs.google.com/viewer?url={url}&embedded=true";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG";
pub const ENV_BACKEND_URL: &str = "FOLIO_BACKEND_URL";
pub const ENV_API_KEY: &str = "FOLIO_API_KEY";
pub const ENV_VIEWER_URL: &str = "FOLIO_VIEWER_URL";
pub const ENV_TIMEOUT_SECS: &str = "FOLIO_TIMEOUT_SECS";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No backend URL configured. Set FOLIO_BACKEND_URL or run with --demo")]
    MissingBackendUrl,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Shape of the optional JSON config file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    backend_url: Option<String>,
    api_key: Option<String>,
    viewer_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend project, e.g. `https://abc.supabase.co`
    pub backend_url: Option<String>,
    /// Anonymous API key sent as `apikey` and bearer token
    pub api_key: Option<String>,
    /// Viewer template containing `{url}`
    pub viewer_url_template: String,
    pub request_timeout_secs: u64,
    /// Use the built-in sample library instead of the backend
    pub demo_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            api_key: None,
            viewer_url_template: DEFAULT_VIEWER_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            demo_mode: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_viewer_url_template(mut self, template: impl Into<String>) -> Self {
        self.viewer_url_template = template.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_demo_mode(mut self, demo: bool) -> Self {
        self.demo_mode = demo;
        self
    }

    /// Default location of the config file (`~/.config/folio/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    /// Load defaults, then the config file, then the environment.
    ///
    /// A missing config file is not an error; an unreadable or malformed one is.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(ENV_CONFIG_PATH)
            .ok()
            .map(PathBuf::from)
            .or_else(Self::default_path);

        let config = match path {
            Some(path) if path.exists() => Self::default().merge_file(&path)?,
            _ => Self::default(),
        };
        config.merge_env()
    }

    /// Overlay values from a JSON config file.
    pub fn merge_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: FileConfig =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(url) = file.backend_url {
            self = self.with_backend_url(url);
        }
        if let Some(key) = file.api_key {
            self.api_key = Some(key);
        }
        if let Some(viewer) = file.viewer_url {
            self.viewer_url_template = viewer;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        Ok(self)
    }

    /// Overlay values from `FOLIO_*` environment variables.
    pub fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Some(url) = non_empty_env(ENV_BACKEND_URL) {
            self = self.with_backend_url(url);
        }
        if let Some(key) = non_empty_env(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(viewer) = non_empty_env(ENV_VIEWER_URL) {
            self.viewer_url_template = viewer;
        }
        if let Some(raw) = non_empty_env(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
        }
        Ok(self)
    }

    /// Check that the settings are usable for the selected mode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.demo_mode && self.backend_url.is_none() {
            return Err(ConfigError::MissingBackendUrl);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        if !self.viewer_url_template.contains("{url}") {
            return Err(ConfigError::InvalidValue {
                key: "viewer_url".to_string(),
                value: self.viewer_url_template.clone(),
            });
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
