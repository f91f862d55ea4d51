//! Unified error type for folio.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::config::ConfigError;
use crate::traits::{HttpError, OpenError};

/// Every failure the library layer can report.
///
/// None of these are retried. Callers log them and degrade to an empty or
/// unchanged view.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The request for a collection never produced a response.
    #[error("{collection} request failed: {source}")]
    Http {
        collection: String,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-2xx status.
    #[error("{collection} request returned HTTP {status}: {message}")]
    Server {
        collection: String,
        status: u16,
        message: String,
    },

    /// The response body was not the expected JSON rows.
    #[error("could not decode {collection}: {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// The platform opener refused a URL.
    #[error(transparent)]
    Open(#[from] OpenError),

    /// Settings are missing or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Http { .. } => ErrorCategory::Network,
            FolioError::Server { .. } => ErrorCategory::Server,
            FolioError::Decode { .. } => ErrorCategory::Data,
            FolioError::Open(_) => ErrorCategory::Platform,
            FolioError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Http { source, .. } => match source {
                HttpError::Timeout(_) => "HTTP_TIMEOUT",
                HttpError::ConnectionFailed(_) => "HTTP_CONNECT",
                HttpError::InvalidUrl(_) => "HTTP_INVALID_URL",
                HttpError::Other(_) => "HTTP_OTHER",
            },
            FolioError::Server { status, .. } => match *status {
                401 | 403 => "BACKEND_UNAUTHORIZED",
                404 => "BACKEND_NOT_FOUND",
                500..=599 => "BACKEND_UNAVAILABLE",
                _ => "BACKEND_STATUS",
            },
            FolioError::Decode { .. } => "DECODE_FAILED",
            FolioError::Open(_) => "OPEN_FAILED",
            FolioError::Config(_) => "CONFIG_INVALID",
        }
    }

    /// Get a message short enough for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Http { collection, .. } => {
                format!("Could not reach the backend while loading {}.", collection)
            }
            FolioError::Server {
                collection, status, ..
            } => match *status {
                401 | 403 => format!("The backend rejected the API key for {}.", collection),
                404 => format!("The {} table was not found on the backend.", collection),
                _ => format!("The backend returned HTTP {} for {}.", status, collection),
            },
            FolioError::Decode { collection, .. } => {
                format!("The {} data from the backend could not be read.", collection)
            }
            FolioError::Open(err) => err.to_string(),
            FolioError::Config(err) => err.to_string(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
