//! AppMessage enum for async communication within the application.

use crate::backend::LibrarySnapshot;

/// Messages received from background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A library load finished. Stale `load_id`s are ignored.
    LibraryLoaded {
        load_id: u64,
        snapshot: LibrarySnapshot,
    },
}
