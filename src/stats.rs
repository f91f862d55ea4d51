//! Aggregates for the admin dashboard.

use std::collections::BTreeMap;

use crate::models::{FileKind, LibraryFile};
use crate::state::LibraryState;

/// How many recent uploads the dashboard lists.
pub const RECENT_UPLOADS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStats {
    pub folder_count: usize,
    pub subfolder_count: usize,
    pub file_count: usize,
    pub total_bytes: u64,
    /// Only kinds that occur
    pub by_kind: BTreeMap<FileKind, usize>,
    /// Newest uploads first
    pub recent: Vec<LibraryFile>,
    /// Subfolders with no files
    pub empty_subfolders: usize,
}

impl LibraryStats {
    pub fn from_library(library: &LibraryState) -> Self {
        Self::with_recent_limit(library, RECENT_UPLOADS)
    }

    pub fn with_recent_limit(library: &LibraryState, limit: usize) -> Self {
        let mut by_kind = BTreeMap::new();
        for file in &library.files {
            *by_kind.entry(file.kind()).or_insert(0) += 1;
        }

        let mut recent: Vec<LibraryFile> = library.files.clone();
        // Stable sort keeps load order among equal timestamps
        recent.sort_by(|a, b| b.file.uploaded_at.cmp(&a.file.uploaded_at));
        recent.truncate(limit);

        Self {
            folder_count: library.folders.len(),
            subfolder_count: library.subfolders.len(),
            file_count: library.files.len(),
            total_bytes: library.files.iter().map(|f| f.file.size).sum(),
            by_kind,
            recent,
            empty_subfolders: library.subfolders.iter().filter(|s| s.files.is_empty()).count(),
        }
    }

    pub fn count_of(&self, kind: FileKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
