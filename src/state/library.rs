//! Loaded library data.

use crate::backend::{LibrarySnapshot, LoadFailure};
use crate::models::{Folder, LibraryFile, Subfolder};

/// The rows of the last completed load.
///
/// Replaced wholesale by every load. The only local mutation is
/// [`LibraryState::delete_file`], which is never sent to the backend.
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub folders: Vec<Folder>,
    pub subfolders: Vec<Subfolder>,
    /// Flat view of every subfolder's files
    pub files: Vec<LibraryFile>,
    /// A load is in flight
    pub loading: bool,
    /// Failures reported by the last load
    pub failures: Vec<LoadFailure>,
}

impl LibraryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the data with a completed load.
    pub fn apply_snapshot(&mut self, snapshot: LibrarySnapshot) {
        self.folders = snapshot.folders;
        self.subfolders = snapshot.subfolders;
        self.files = snapshot.files;
        self.failures = snapshot.failures;
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.subfolders.is_empty()
    }

    /// One line summarising the last load's failures, if any.
    pub fn failure_summary(&self) -> Option<String> {
        match self.failures.as_slice() {
            [] => None,
            [only] => Some(format!("{}: {}", only.collection, only.message)),
            many => {
                let names: Vec<&str> = many.iter().map(|f| f.collection.as_str()).collect();
                Some(format!("Failed to load {}", names.join(" and ")))
            }
        }
    }

    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn find_subfolder(&self, id: &str) -> Option<&Subfolder> {
        self.subfolders.iter().find(|s| s.id == id)
    }

    pub fn find_file(&self, id: &str) -> Option<&LibraryFile> {
        self.files.iter().find(|f| f.id() == id)
    }

    /// Subfolders whose parent is `folder_id`, in load order.
    pub fn subfolders_of(&self, folder_id: &str) -> Vec<&Subfolder> {
        self.subfolders
            .iter()
            .filter(|s| s.folder_id == folder_id)
            .collect()
    }

    /// Flat entries belonging to `subfolder_id`, in embedded order.
    pub fn files_in_subfolder(&self, subfolder_id: &str) -> Vec<&LibraryFile> {
        self.files
            .iter()
            .filter(|f| f.subfolder_id == subfolder_id)
            .collect()
    }

    /// Remove a file locally.
    ///
    /// Removes exactly the entry with `file_id` from the flat list and from
    /// its subfolder's embedded list. Everything else keeps its order.
    pub fn delete_file(&mut self, file_id: &str) -> Option<LibraryFile> {
        let position = self.files.iter().position(|f| f.id() == file_id)?;
        let removed = self.files.remove(position);

        if let Some(subfolder) = self
            .subfolders
            .iter_mut()
            .find(|s| s.id == removed.subfolder_id)
        {
            subfolder.files.retain(|f| f.id != file_id);
        }

        tracing::info!(
            "Deleted {} from {} (local only)",
            removed.name(),
            removed.subfolder_name
        );
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_library;

    fn loaded() -> LibraryState {
        let mut state = LibraryState::new();
        state.loading = true;
        state.apply_snapshot(sample_library());
        state
    }

    #[test]
    fn test_apply_snapshot_clears_loading() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.folders.len(), 3);
        assert!(state.failure_summary().is_none());
    }

    #[test]
    fn test_subfolders_of() {
        let state = loaded();
        let ids: Vec<_> = state.subfolders_of("orch").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["orch-mozart", "orch-beethoven"]);
        assert!(state.subfolders_of("missing").is_empty());
    }

    #[test]
    fn test_delete_file_removes_only_match() {
        let mut state = loaded();
        let before: Vec<String> = state.files.iter().map(|f| f.id().to_string()).collect();

        let removed = state.delete_file("b2").unwrap();
        assert_eq!(removed.name(), "Violin I.pdf");

        let expected: Vec<String> = before.into_iter().filter(|id| id != "b2").collect();
        let after: Vec<String> = state.files.iter().map(|f| f.id().to_string()).collect();
        assert_eq!(after, expected);

        let embedded: Vec<&str> = state
            .find_subfolder("orch-beethoven")
            .unwrap()
            .files
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(embedded, vec!["b1", "b3", "b4"]);
    }

    #[test]
    fn test_delete_unknown_file_is_noop() {
        let mut state = loaded();
        assert!(state.delete_file("nope").is_none());
        assert_eq!(state.files.len(), 9);
    }

    #[test]
    fn test_failure_summary() {
        let mut state = LibraryState::new();
        state.failures = vec![LoadFailure {
            collection: "folders".to_string(),
            code: "HTTP_TIMEOUT",
            message: "Request timed out".to_string(),
        }];
        assert_eq!(
            state.failure_summary().as_deref(),
            Some("folders: Request timed out")
        );

        state.failures.push(LoadFailure {
            collection: "subfolders".to_string(),
            code: "HTTP_TIMEOUT",
            message: "Request timed out".to_string(),
        });
        assert_eq!(
            state.failure_summary().as_deref(),
            Some("Failed to load folders and subfolders")
        );
    }
}
