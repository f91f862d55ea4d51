//! View-state machine for the library browser.
//!
//! Three levels: all folders, the subfolders of one folder, and the files of
//! one subfolder. The breadcrumb always mirrors the current level. Transitions
//! never fail.

use std::collections::BTreeSet;

use crate::models::{Folder, Subfolder};

/// Label of the first breadcrumb entry.
pub const ROOT_LABEL: &str = "Music Library";

/// Which level of the library is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Folders,
    Subfolders,
    Files,
}

impl ViewMode {
    /// Breadcrumb depth of this level (0 for the root).
    pub fn depth(&self) -> usize {
        match self {
            ViewMode::Folders => 0,
            ViewMode::Subfolders => 1,
            ViewMode::Files => 2,
        }
    }
}

/// Current position in the library plus per-view UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub view: ViewMode,
    pub selected_folder: Option<Folder>,
    pub selected_subfolder: Option<Subfolder>,
    /// Labels from the root to the current level
    pub breadcrumb: Vec<String>,
    /// Ids of files whose inline preview is open
    pub expanded_previews: BTreeSet<String>,
    /// Filename filter for the files view
    pub search_query: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            view: ViewMode::Folders,
            selected_folder: None,
            selected_subfolder: None,
            breadcrumb: vec![ROOT_LABEL.to_string()],
            expanded_previews: BTreeSet::new(),
            search_query: String::new(),
        }
    }

    /// Enter a folder and list its subfolders.
    pub fn open_folder(&mut self, folder: &Folder) {
        tracing::debug!("Opening folder {} ({})", folder.name, folder.id);
        self.view = ViewMode::Subfolders;
        self.breadcrumb = vec![ROOT_LABEL.to_string(), folder.name.clone()];
        self.selected_folder = Some(folder.clone());
        self.selected_subfolder = None;
        self.expanded_previews.clear();
        self.search_query.clear();
    }

    /// Enter a subfolder and list its files.
    ///
    /// The first file named `*.pdf` (any case), in the subfolder's own order,
    /// gets its inline preview opened; every other preview is closed.
    pub fn open_subfolder(&mut self, subfolder: &Subfolder) {
        tracing::debug!("Opening subfolder {} ({})", subfolder.name, subfolder.id);
        let folder_label = self
            .selected_folder
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_default();

        self.view = ViewMode::Files;
        self.breadcrumb = vec![
            ROOT_LABEL.to_string(),
            folder_label,
            subfolder.name.clone(),
        ];
        self.selected_subfolder = Some(subfolder.clone());
        self.search_query.clear();

        self.expanded_previews.clear();
        if let Some(first_pdf) = subfolder
            .files
            .iter()
            .find(|f| f.name.to_lowercase().ends_with(".pdf"))
        {
            self.expanded_previews.insert(first_pdf.id.clone());
        }
    }

    /// Go up one level. No-op at the root.
    pub fn back(&mut self) {
        match self.view {
            ViewMode::Files => {
                tracing::debug!("Back to subfolders");
                self.view = ViewMode::Subfolders;
                self.selected_subfolder = None;
                self.expanded_previews.clear();
                self.search_query.clear();
                self.breadcrumb.truncate(2);
            }
            ViewMode::Subfolders => {
                tracing::debug!("Back to folders");
                *self = Self::new();
            }
            ViewMode::Folders => {}
        }
    }

    /// Jump to the level a breadcrumb entry names.
    ///
    /// Index 0 is the root and yields the initial state. The current level
    /// and indices past it are ignored.
    pub fn jump_to_breadcrumb(&mut self, index: usize) {
        if index >= self.view.depth() {
            return;
        }
        if index == 0 {
            *self = Self::new();
        } else {
            self.view = ViewMode::Subfolders;
            self.selected_subfolder = None;
            self.expanded_previews.clear();
            self.search_query.clear();
            self.breadcrumb.truncate(2);
        }
        tracing::debug!("Jumped to breadcrumb {} ({:?})", index, self.view);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Open or close the inline preview for a file.
    pub fn toggle_preview(&mut self, file_id: &str) {
        if !self.expanded_previews.remove(file_id) {
            self.expanded_previews.insert(file_id.to_string());
        }
    }

    pub fn is_previewing(&self, file_id: &str) -> bool {
        self.expanded_previews.contains(file_id)
    }

    /// Drop a file that no longer exists from the preview set.
    pub fn forget_file(&mut self, file_id: &str) {
        self.expanded_previews.remove(file_id);
        if let Some(ref mut subfolder) = self.selected_subfolder {
            subfolder.files.retain(|f| f.id != file_id);
        }
    }

    /// Re-point the selections at freshly loaded rows, or fall back to the
    /// deepest level that still exists.
    pub fn reconcile(&mut self, folders: &[Folder], subfolders: &[Subfolder]) {
        let folder = self
            .selected_folder
            .as_ref()
            .and_then(|sel| folders.iter().find(|f| f.id == sel.id).cloned());
        let subfolder = self
            .selected_subfolder
            .as_ref()
            .and_then(|sel| subfolders.iter().find(|s| s.id == sel.id).cloned());

        match (self.view, folder, subfolder) {
            (ViewMode::Folders, _, _) => {}
            (ViewMode::Subfolders, Some(folder), _) => {
                self.breadcrumb[1] = folder.name.clone();
                self.selected_folder = Some(folder);
            }
            (ViewMode::Files, Some(folder), Some(subfolder)) => {
                self.breadcrumb[1] = folder.name.clone();
                self.breadcrumb[2] = subfolder.name.clone();
                self.expanded_previews
                    .retain(|id| subfolder.files.iter().any(|f| &f.id == id));
                self.selected_folder = Some(folder);
                self.selected_subfolder = Some(subfolder);
            }
            (ViewMode::Files, Some(folder), None) => {
                tracing::debug!("Selected subfolder vanished after reload");
                self.open_folder(&folder);
            }
            (_, None, _) => {
                tracing::debug!("Selected folder vanished after reload");
                *self = Self::new();
            }
        }
    }
}
