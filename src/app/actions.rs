//! Command execution for the App.

use super::{App, InputMode, StatusKind};
use crate::input::Command;
use crate::models::{is_pdf_like, Folder, Subfolder};
use crate::preview::{open_externally, resolve_activation, OpenOutcome, PreviewAction, PreviewModal};
use crate::state::{ViewMode, VisibleItems};

/// Rows kept visible when scrolling; the renderer narrows this to its area.
pub const DEFAULT_VISIBLE_ROWS: usize = 20;

impl App {
    pub fn execute_command(&mut self, cmd: Command) {
        if cmd != Command::Noop {
            self.mark_dirty();
        }
        match cmd {
            Command::Quit => self.quit(),
            Command::SwitchScreen => {
                self.screen = self.screen.toggled();
                self.input_mode = InputMode::Normal;
            }
            Command::Refresh => {
                self.set_status(StatusKind::Info, "Refreshing library…");
                self.start_load();
            }
            Command::MoveUp => {
                self.cursor.move_up();
                self.cursor.ensure_visible(DEFAULT_VISIBLE_ROWS);
            }
            Command::MoveDown => {
                let len = self.visible().len();
                self.cursor.move_down(len);
                self.cursor.ensure_visible(DEFAULT_VISIBLE_ROWS);
            }
            Command::Activate => self.activate_selected(),
            Command::Back => self.go_back(),
            Command::JumpToBreadcrumb(index) => {
                if index < self.nav.breadcrumb.len() && index != self.nav.view.depth() {
                    self.nav.jump_to_breadcrumb(index);
                    self.cursor.reset();
                }
            }
            Command::StartSearch => self.input_mode = InputMode::Search,
            Command::SearchInput(c) => {
                let mut query = self.nav.search_query.clone();
                query.push(c);
                self.set_search(query);
            }
            Command::SearchBackspace => {
                let mut query = self.nav.search_query.clone();
                query.pop();
                self.set_search(query);
            }
            Command::FinishSearch => self.input_mode = InputMode::Normal,
            Command::CancelSearch => {
                self.input_mode = InputMode::Normal;
                self.set_search(String::new());
            }
            Command::OpenPreviewModal => self.open_preview_modal(),
            Command::ClosePreviewModal => self.modal = None,
            Command::OpenExternal => self.open_selected_externally(),
            Command::RequestDelete => {
                self.pending_delete = self.selected_file().cloned();
            }
            Command::ConfirmDelete => self.confirm_delete(),
            Command::CancelDelete => self.pending_delete = None,
            Command::Noop => {}
        }
    }

    fn set_search(&mut self, query: String) {
        self.nav.set_search_query(query);
        self.cursor.reset();
    }

    fn activate_selected(&mut self) {
        let target = match self.visible() {
            VisibleItems::Folders(items) => items
                .get(self.cursor.selected)
                .map(|f| Activation::Folder((*f).clone())),
            VisibleItems::Subfolders(items) => items
                .get(self.cursor.selected)
                .map(|s| Activation::Subfolder((*s).clone())),
            VisibleItems::Files(items) => items
                .get(self.cursor.selected)
                .map(|f| Activation::File(resolve_activation(&f.file), f.id().to_string())),
        };

        match target {
            Some(Activation::Folder(folder)) => {
                self.nav.open_folder(&folder);
                self.cursor.reset();
            }
            Some(Activation::Subfolder(subfolder)) => {
                self.nav.open_subfolder(&subfolder);
                self.cursor.reset();
                self.input_mode = InputMode::Normal;
            }
            Some(Activation::File(PreviewAction::ToggleInline, id)) => {
                self.nav.toggle_preview(&id);
            }
            Some(Activation::File(PreviewAction::OpenExternal(_), _)) => {
                self.open_selected_externally();
            }
            Some(Activation::File(PreviewAction::Unavailable, _)) => {
                self.set_status(StatusKind::Warning, "This file has no link to open");
            }
            None => {}
        }
    }

    /// Go up one level and put the cursor back on the row we came from.
    fn go_back(&mut self) {
        let came_from = match self.nav.view {
            ViewMode::Files => self.nav.selected_subfolder.as_ref().map(|s| s.id.clone()),
            ViewMode::Subfolders => self.nav.selected_folder.as_ref().map(|f| f.id.clone()),
            ViewMode::Folders => return,
        };
        self.nav.back();
        self.input_mode = InputMode::Normal;

        let position = came_from.and_then(|id| match self.visible() {
            VisibleItems::Folders(items) => items.iter().position(|f| f.id == id),
            VisibleItems::Subfolders(items) => items.iter().position(|s| s.id == id),
            VisibleItems::Files(_) => None,
        });
        self.cursor.reset();
        if let Some(position) = position {
            self.cursor.selected = position;
            self.cursor.ensure_visible(DEFAULT_VISIBLE_ROWS);
        }
    }

    fn open_preview_modal(&mut self) {
        let Some(file) = self.selected_file().cloned() else {
            return;
        };
        if !is_pdf_like(&file.file) {
            self.set_status(StatusKind::Warning, "Preview is only available for PDF files");
            return;
        }
        self.modal = Some(PreviewModal::new(&file, &self.config.viewer_url_template));
    }

    fn open_selected_externally(&mut self) {
        // In the modal, "open" means the previewed file
        let file = match self.modal {
            Some(ref modal) => Some(modal.file.clone()),
            None => self.selected_file().cloned(),
        };
        let Some(file) = file else {
            return;
        };

        match open_externally(self.opener(), &file.file) {
            OpenOutcome::Opened => {
                self.set_status(StatusKind::Info, format!("Opened {}", file.name()));
            }
            OpenOutcome::FellBackToModal(err) => {
                self.modal = Some(PreviewModal::new(&file, &self.config.viewer_url_template));
                self.set_status(
                    StatusKind::Warning,
                    format!("{} Showing the in-app preview instead.", err),
                );
            }
            OpenOutcome::Failed(err) => self.set_status(StatusKind::Error, err.to_string()),
            OpenOutcome::NoUrl => {
                self.set_status(StatusKind::Warning, "This file has no link to open");
            }
        }
    }

    fn confirm_delete(&mut self) {
        let Some(file) = self.pending_delete.take() else {
            return;
        };
        if self.library.delete_file(file.id()).is_some() {
            self.nav.forget_file(file.id());
            if self.modal.as_ref().is_some_and(|m| m.file.id() == file.id()) {
                self.modal = None;
            }
            let len = self.visible().len();
            self.cursor.clamp(len);
            self.set_status(StatusKind::Info, format!("Deleted {}", file.name()));
        }
    }
}

enum Activation {
    Folder(Folder),
    Subfolder(Subfolder),
    File(PreviewAction, String),
}
