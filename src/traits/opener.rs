//! External URL opener abstraction.
//!
//! Hands a URL to whatever the platform uses to open it outside the app.
//! Success or failure is the only thing we learn back.

use thiserror::Error;

/// Failure to hand a URL to the platform.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OpenError {
    /// No handler accepted the URL.
    #[error("Could not open {url}: {message}")]
    Unavailable { url: String, message: String },

    /// The URL is empty or not something we would hand to a browser.
    #[error("Refusing to open invalid URL: {0}")]
    InvalidUrl(String),
}

/// Trait for opening URLs outside the application.
pub trait UrlOpener: Send + Sync {
    /// Open `url` with the platform default handler.
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Reject URLs that no external handler should receive.
pub fn validate_url(url: &str) -> Result<(), OpenError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(OpenError::InvalidUrl(url.to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(OpenError::InvalidUrl(url.to_string()));
    }
    Ok(())
}
