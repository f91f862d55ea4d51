//! Where a library snapshot comes from.

use async_trait::async_trait;

use crate::backend::LibrarySnapshot;

/// A source that can produce a complete library snapshot.
///
/// Loads are best effort: implementations report partial failures inside the
/// snapshot instead of returning an error.
#[async_trait]
pub trait LibrarySource: Send + Sync {
    async fn load(&self) -> LibrarySnapshot;

    /// Short label for the header ("demo", the backend host, ...)
    fn describe(&self) -> String;
}
