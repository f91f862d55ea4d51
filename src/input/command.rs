//! Command definitions for keyboard input handling.
//!
//! Every key the browser reacts to is translated into a [`Command`] first, so
//! key bindings stay separate from their effects.

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    Quit,
    /// Flip between library and dashboard (Tab)
    SwitchScreen,
    /// Reload from the backend (r)
    Refresh,

    // =========================================================================
    // Library navigation
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Enter a folder or subfolder, or activate a file
    Activate,
    Back,
    /// Jump to breadcrumb entry `n` (0 is the root)
    JumpToBreadcrumb(usize),

    // =========================================================================
    // Files view
    // =========================================================================
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search mode keeping the query
    FinishSearch,
    /// Leave search mode and clear the query
    CancelSearch,
    OpenPreviewModal,
    OpenExternal,
    RequestDelete,

    // =========================================================================
    // Modals
    // =========================================================================
    ClosePreviewModal,
    ConfirmDelete,
    CancelDelete,

    /// Swallow the key
    Noop,
}

impl Command {
    /// Whether the command only makes sense on a file row.
    pub fn needs_file(&self) -> bool {
        matches!(
            self,
            Command::StartSearch
                | Command::OpenPreviewModal
                | Command::OpenExternal
                | Command::RequestDelete
        )
    }
}
