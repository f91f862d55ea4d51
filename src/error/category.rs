//! Error category classification.
//!
//! Categories group errors by where they come from so the UI can pick a
//! status line and the log can be filtered without matching every variant.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures (connection refused, DNS, timeout).
    Network,

    /// The backend answered with a non-2xx status.
    Server,

    /// The backend answered, but the payload did not have the expected shape.
    Data,

    /// The platform could not do what we asked (open a URL, write a log file).
    Platform,

    /// Missing or malformed settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Data => "data",
            ErrorCategory::Platform => "platform",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Backend error",
            ErrorCategory::Data => "Unexpected data from the backend",
            ErrorCategory::Platform => "System integration problem",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press r to reload",
            ErrorCategory::Server => "The backend may be unavailable. Press r to reload later",
            ErrorCategory::Data => "The library data may be malformed. Check the backend tables",
            ErrorCategory::Platform => "Check that a default browser or viewer is installed",
            ErrorCategory::Configuration => "Set FOLIO_BACKEND_URL and FOLIO_API_KEY, or run with --demo",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
