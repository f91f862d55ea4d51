//! What the current view shows.
//!
//! Pure functions over the loaded data and the navigation state; recomputed
//! on every frame.

use super::library::LibraryState;
use super::navigation::{NavigationState, ViewMode};
use crate::models::{Folder, LibraryFile, Subfolder};

/// Rows of the current view.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleItems<'a> {
    Folders(Vec<&'a Folder>),
    Subfolders(Vec<&'a Subfolder>),
    Files(Vec<&'a LibraryFile>),
}

impl VisibleItems<'_> {
    pub fn len(&self) -> usize {
        match self {
            VisibleItems::Folders(items) => items.len(),
            VisibleItems::Subfolders(items) => items.len(),
            VisibleItems::Files(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep files whose name contains `query`, ignoring case. An empty query
/// keeps everything. Order is preserved.
pub fn filter_files_by_query<'a>(files: &[&'a LibraryFile], query: &str) -> Vec<&'a LibraryFile> {
    if query.is_empty() {
        return files.to_vec();
    }
    let query_lower = query.to_lowercase();
    files
        .iter()
        .filter(|f| f.name().to_lowercase().contains(&query_lower))
        .copied()
        .collect()
}

/// Rows for the current view.
///
/// Folders: every folder. Subfolders: those whose parent is the selected
/// folder. Files: the selected subfolder's files matching the search query.
pub fn visible_items<'a>(library: &'a LibraryState, nav: &NavigationState) -> VisibleItems<'a> {
    match nav.view {
        ViewMode::Folders => VisibleItems::Folders(library.folders.iter().collect()),
        ViewMode::Subfolders => {
            let items = nav
                .selected_folder
                .as_ref()
                .map(|folder| library.subfolders_of(&folder.id))
                .unwrap_or_default();
            VisibleItems::Subfolders(items)
        }
        ViewMode::Files => {
            let files = nav
                .selected_subfolder
                .as_ref()
                .map(|sub| library.files_in_subfolder(&sub.id))
                .unwrap_or_default();
            VisibleItems::Files(filter_files_by_query(&files, &nav.search_query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_library;

    fn library() -> LibraryState {
        let mut state = LibraryState::new();
        state.apply_snapshot(sample_library());
        state
    }

    fn names(items: &[&LibraryFile]) -> Vec<String> {
        items.iter().map(|f| f.name().to_string()).collect()
    }

    #[test]
    fn test_filter_empty_query_returns_all_in_order() {
        let lib = library();
        let all: Vec<&LibraryFile> = lib.files.iter().collect();
        assert_eq!(filter_files_by_query(&all, ""), all);
    }

    #[test]
    fn test_filter_matches_lowercase_substring() {
        let lib = library();
        let all: Vec<&LibraryFile> = lib.files.iter().collect();
        for query in ["PDF", "ave", "a train", "zzz", "."] {
            let expected: Vec<&LibraryFile> = all
                .iter()
                .filter(|f| f.name().to_lowercase().contains(&query.to_lowercase()))
                .copied()
                .collect();
            assert_eq!(filter_files_by_query(&all, query), expected, "query {query}");
        }
    }

    #[test]
    fn test_folders_view_lists_all_folders() {
        let lib = library();
        let nav = NavigationState::new();
        assert_eq!(visible_items(&lib, &nav).len(), 3);
    }

    #[test]
    fn test_subfolders_view_filters_by_parent() {
        let lib = library();
        let mut nav = NavigationState::new();
        nav.open_folder(lib.find_folder("orch").unwrap());

        match visible_items(&lib, &nav) {
            VisibleItems::Subfolders(subs) => {
                assert_eq!(subs.len(), 2);
                assert!(subs.iter().all(|s| s.folder_id == "orch"));
            }
            other => panic!("Expected subfolders, got {:?}", other),
        }
    }

    #[test]
    fn test_files_view_applies_query() {
        let lib = library();
        let mut nav = NavigationState::new();
        nav.open_folder(lib.find_folder("orch").unwrap());
        nav.open_subfolder(lib.find_subfolder("orch-beethoven").unwrap());

        assert_eq!(visible_items(&lib, &nav).len(), 4);

        nav.set_search_query("PDF");
        match visible_items(&lib, &nav) {
            VisibleItems::Files(files) => {
                assert_eq!(names(&files), vec!["Full Score.pdf", "Violin I.pdf"]);
            }
            other => panic!("Expected files, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_subfolder_shows_nothing() {
        let lib = library();
        let mut nav = NavigationState::new();
        nav.open_folder(lib.find_folder("orch").unwrap());
        nav.open_subfolder(lib.find_subfolder("orch-mozart").unwrap());
        assert!(visible_items(&lib, &nav).is_empty());
    }
}
