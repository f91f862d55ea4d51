//! Snapshot of the app state that decides how keys are read.

use crate::app::{InputMode, Screen};
use crate::state::ViewMode;

/// The modal dialog currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Full-screen file preview
    Preview,
    /// "Delete this file?" prompt
    ConfirmDelete,
}

#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub screen: Screen,
    pub mode: InputMode,
    pub modal: ModalType,
    pub view: ViewMode,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_searching(&self) -> bool {
        self.mode == InputMode::Search
    }
}
