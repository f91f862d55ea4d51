//! Application state and logic for the TUI.
//!
//! - [`App`] - everything the UI renders and the key handlers mutate
//! - [`Screen`] - library browser or admin dashboard
//! - [`AppMessage`] - results coming back from background tasks

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{InputMode, Screen, StatusKind, StatusMessage, STATUS_TTL};

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::input::{InputContext, ModalType};
use crate::loader::{spawn_library_load, LoadHandle};
use crate::models::LibraryFile;
use crate::preview::PreviewModal;
use crate::state::{visible_items, LibraryState, ListCursor, NavigationState, VisibleItems};
use crate::traits::{LibrarySource, UrlOpener};

/// Main application state
pub struct App {
    pub config: Config,
    pub library: LibraryState,
    pub nav: NavigationState,
    /// Selection in the current list
    pub cursor: ListCursor,
    pub screen: Screen,
    pub input_mode: InputMode,
    /// Full-screen preview, when open
    pub modal: Option<PreviewModal>,
    /// File awaiting delete confirmation
    pub pending_delete: Option<LibraryFile>,
    pub status: Option<StatusMessage>,
    /// Label of where the data comes from
    pub source_label: String,
    pub should_quit: bool,
    /// Set whenever visible state changes; cleared after each draw
    pub needs_redraw: bool,
    /// Receiver for background results, taken by the run loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    source: Arc<dyn LibrarySource>,
    opener: Arc<dyn UrlOpener>,
    load: Option<LoadHandle>,
    next_load_id: u64,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn LibrarySource>, opener: Arc<dyn UrlOpener>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            config,
            library: LibraryState::new(),
            nav: NavigationState::new(),
            cursor: ListCursor::new(),
            screen: Screen::default(),
            input_mode: InputMode::default(),
            modal: None,
            pending_delete: None,
            status: None,
            source_label: source.describe(),
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            source,
            opener,
            load: None,
            next_load_id: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Stop the app. Any in-flight load is cancelled.
    pub fn quit(&mut self) {
        self.cancel_load();
        self.should_quit = true;
    }

    /// Per-tick housekeeping: expire the status message.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
            self.mark_dirty();
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(kind, text));
        self.mark_dirty();
    }

    /// Start a fresh load, cancelling the one in flight.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start_load(&mut self) {
        self.cancel_load();
        self.next_load_id += 1;
        self.library.loading = true;
        self.load = Some(spawn_library_load(
            self.source.clone(),
            self.next_load_id,
            self.message_tx.clone(),
        ));
        self.mark_dirty();
    }

    fn cancel_load(&mut self) {
        if let Some(handle) = self.load.take() {
            handle.cancel();
        }
    }

    /// Id of the load whose result is still wanted.
    pub fn current_load_id(&self) -> Option<u64> {
        self.load.as_ref().map(|h| h.load_id())
    }

    pub fn is_loading(&self) -> bool {
        self.library.loading
    }

    pub fn visible(&self) -> VisibleItems<'_> {
        visible_items(&self.library, &self.nav)
    }

    /// The file under the cursor, in the files view.
    pub fn selected_file(&self) -> Option<&LibraryFile> {
        match self.visible() {
            VisibleItems::Files(files) => files.get(self.cursor.selected).copied(),
            _ => None,
        }
    }

    pub fn input_context(&self) -> InputContext {
        let modal = if self.pending_delete.is_some() {
            ModalType::ConfirmDelete
        } else if self.modal.is_some() {
            ModalType::Preview
        } else {
            ModalType::None
        };
        InputContext::new()
            .with_screen(self.screen)
            .with_mode(self.input_mode)
            .with_modal(modal)
            .with_view(self.nav.view)
    }

    pub(crate) fn opener(&self) -> &dyn UrlOpener {
        self.opener.as_ref()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::MockOpener;
    use crate::demo::{sample_library, DemoSource};

    /// An app with the sample library already applied.
    pub fn loaded_app() -> (App, MockOpener) {
        let opener = MockOpener::new();
        let mut app = App::new(
            Config::default().with_demo_mode(true),
            Arc::new(DemoSource),
            Arc::new(opener.clone()),
        );
        app.library.apply_snapshot(sample_library());
        (app, opener)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::loaded_app;
    use super::*;
    use crate::state::ViewMode;
    use std::time::Duration;

    #[test]
    fn test_new_app_starts_on_library_root() {
        let (app, _) = loaded_app();
        assert_eq!(app.screen, Screen::Library);
        assert_eq!(app.nav.view, ViewMode::Folders);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
        assert_eq!(app.source_label, "demo");
        assert!(app.selected_file().is_none());
    }

    #[test]
    fn test_input_context_reflects_modals() {
        let (mut app, _) = loaded_app();
        assert_eq!(app.input_context().modal, ModalType::None);

        app.pending_delete = Some(app.library.files[0].clone());
        assert_eq!(app.input_context().modal, ModalType::ConfirmDelete);
    }

    #[test]
    fn test_tick_expires_status() {
        let (mut app, _) = loaded_app();
        app.set_status(StatusKind::Info, "hello");
        if let Some(ref mut status) = app.status {
            status.shown_at = Instant::now() - STATUS_TTL - Duration::from_millis(1);
        }
        app.needs_redraw = false;
        app.tick();
        assert!(app.status.is_none());
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_refresh_cancels_previous_load() {
        let (mut app, _) = loaded_app();
        app.start_load();
        let first = app.current_load_id();
        app.start_load();
        assert_ne!(app.current_load_id(), first);
        assert!(app.is_loading());

        app.quit();
        assert!(app.current_load_id().is_none());
        assert!(app.should_quit);
    }
}
