//! Message handling for the App.

use super::{App, AppMessage, InputMode, StatusKind};
use crate::backend::LibrarySnapshot;
use crate::format::count_label;
use crate::state::ViewMode;

impl App {
    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LibraryLoaded { load_id, snapshot } => {
                if self.current_load_id() != Some(load_id) {
                    tracing::debug!("Ignoring snapshot of superseded load {}", load_id);
                    return;
                }
                self.load = None;
                self.apply_snapshot(snapshot);
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: LibrarySnapshot) {
        self.library.apply_snapshot(snapshot);
        self.nav
            .reconcile(&self.library.folders, &self.library.subfolders);
        // Search only applies to the files view
        if self.nav.view != ViewMode::Files {
            self.input_mode = InputMode::Normal;
        }

        let len = self.visible().len();
        self.cursor.clamp(len);

        match self.library.failure_summary() {
            Some(summary) => self.set_status(StatusKind::Error, summary),
            None => {
                let text = format!(
                    "Loaded {}, {}, {}",
                    count_label(self.library.folders.len(), "folder"),
                    count_label(self.library.subfolders.len(), "subfolder"),
                    count_label(self.library.files.len(), "file")
                );
                self.set_status(StatusKind::Info, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::loaded_app;
    use crate::app::{AppMessage, InputMode, StatusKind};
    use crate::backend::{LibrarySnapshot, LoadFailure};
    use crate::demo::sample_library;
    use crate::input::Command;
    use crate::state::ViewMode;

    #[tokio::test]
    async fn test_stale_snapshot_is_ignored() {
        let (mut app, _) = loaded_app();
        app.start_load();
        let current = app.current_load_id().unwrap();

        app.handle_message(AppMessage::LibraryLoaded {
            load_id: current + 10,
            snapshot: LibrarySnapshot::default(),
        });
        assert_eq!(app.library.folders.len(), 3);
        assert!(app.is_loading());

        app.handle_message(AppMessage::LibraryLoaded {
            load_id: current,
            snapshot: sample_library(),
        });
        assert!(!app.is_loading());
        assert!(app.current_load_id().is_none());
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Loaded 3 folders, 4 subfolders, 9 files")
        );
    }

    #[tokio::test]
    async fn test_partial_failure_shows_error_status() {
        let (mut app, _) = loaded_app();
        app.start_load();
        let load_id = app.current_load_id().unwrap();

        let mut snapshot = sample_library();
        snapshot.subfolders.clear();
        snapshot.files.clear();
        snapshot.failures.push(LoadFailure {
            collection: "subfolders".to_string(),
            code: "BACKEND_UNAVAILABLE",
            message: "Backend error (503)".to_string(),
        });

        app.handle_message(AppMessage::LibraryLoaded { load_id, snapshot });
        assert_eq!(app.library.folders.len(), 3);
        assert!(app.library.subfolders.is_empty());
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("subfolders:"));
    }

    #[tokio::test]
    async fn test_reload_out_of_files_view_ends_search() {
        let (mut app, _) = loaded_app();
        for cmd in [
            Command::MoveDown,
            Command::MoveDown,
            Command::Activate,
            Command::MoveDown,
            Command::Activate,
            Command::StartSearch,
        ] {
            app.execute_command(cmd);
        }
        assert_eq!(app.nav.view, ViewMode::Files);
        assert_eq!(app.input_mode, InputMode::Search);

        let full = sample_library();
        let subfolders = full
            .subfolders
            .into_iter()
            .filter(|s| s.id != "orch-beethoven")
            .collect();
        app.start_load();
        let load_id = app.current_load_id().unwrap();
        app.handle_message(AppMessage::LibraryLoaded {
            load_id,
            snapshot: LibrarySnapshot::from_rows(full.folders, subfolders),
        });

        assert_eq!(app.nav.view, ViewMode::Subfolders);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
