//! Mock URL opener for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{OpenError, UrlOpener};

/// Records every URL it is asked to open and optionally fails.
#[derive(Debug, Clone, Default)]
pub struct MockOpener {
    opened: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        let opener = Self::new();
        opener.set_failure(Some(message));
        opener
    }

    pub fn set_failure(&self, message: Option<&str>) {
        *self.fail_with.lock().unwrap() = message.map(str::to_string);
    }

    /// URLs passed to `open`, in call order (failed calls included).
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl UrlOpener for MockOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(OpenError::Unavailable {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
