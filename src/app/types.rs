//! Type definitions for the application state.

use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
pub const STATUS_TTL: Duration = Duration::from_secs(5);

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Library,
    Dashboard,
}

impl Screen {
    pub fn toggled(self) -> Self {
        match self {
            Screen::Library => Screen::Dashboard,
            Screen::Dashboard => Screen::Library,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Library => "Library",
            Screen::Dashboard => "Dashboard",
        }
    }
}

/// Whether typed characters go to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Transient footer message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= STATUS_TTL
    }
}
