//! Platform URL opener adapter.

use crate::traits::{validate_url, OpenError, UrlOpener};

/// Opens URLs with the desktop's default handler.
///
/// Tries `open::that` first and falls back to `webbrowser::open`, which
/// knows about `$BROWSER` and a few terminal browsers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        validate_url(url)?;

        match open::that(url) {
            Ok(()) => Ok(()),
            Err(first) => {
                tracing::debug!("open::that failed for {}: {}; trying webbrowser", url, first);
                webbrowser::open(url).map_err(|second| OpenError::Unavailable {
                    url: url.to_string(),
                    message: format!("{}; {}", first, second),
                })
            }
        }
    }
}
