//! Background library loads.
//!
//! A load runs on its own task and reports back over the app channel. Every
//! load is guarded by a [`CancellationToken`]; once the token is cancelled the
//! task never sends its result, so a refresh or an exit cannot be overtaken by
//! a stale snapshot.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::app::AppMessage;
use crate::backend::LibraryClient;
use crate::config::{Config, ConfigError};
use crate::demo::DemoSource;
use crate::traits::LibrarySource;

/// Pick the library source the configuration asks for.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn LibrarySource>, ConfigError> {
    if config.demo_mode {
        return Ok(Arc::new(DemoSource));
    }
    Ok(Arc::new(LibraryClient::from_config(config)?))
}

/// Handle to an in-flight load. Dropping it cancels the load.
#[derive(Debug)]
pub struct LoadHandle {
    load_id: u64,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl LoadHandle {
    pub fn load_id(&self) -> u64 {
        self.load_id
    }

    /// Stop the load. Its result, if any, is discarded.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Cancelling library load {}", self.load_id);
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the task has exited (delivered, cancelled or panicked).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Start loading the library from `source`.
///
/// The snapshot is delivered as [`AppMessage::LibraryLoaded`] tagged with
/// `load_id`, unless the returned handle is cancelled or dropped first.
pub fn spawn_library_load(
    source: Arc<dyn LibrarySource>,
    load_id: u64,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> LoadHandle {
    let token = CancellationToken::new();
    let guard = token.clone();

    tracing::info!("Starting library load {} from {}", load_id, source.describe());

    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = guard.cancelled() => {
                tracing::debug!("Library load {} cancelled before completion", load_id);
            }
            snapshot = source.load() => {
                // Cancellation may land between the load finishing and this poll
                if guard.is_cancelled() {
                    tracing::debug!("Discarding snapshot of cancelled load {}", load_id);
                    return;
                }
                if tx.send(AppMessage::LibraryLoaded { load_id, snapshot }).is_err() {
                    tracing::debug!("App gone, dropping snapshot of load {}", load_id);
                }
            }
        }
    });

    LoadHandle {
        load_id,
        token,
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LibrarySnapshot;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Source that blocks until released.
    struct GatedSource {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl LibrarySource for GatedSource {
        async fn load(&self) -> LibrarySnapshot {
            self.release.notified().await;
            crate::demo::sample_library()
        }

        fn describe(&self) -> String {
            "gated".to_string()
        }
    }

    #[test]
    fn test_source_from_config() {
        let demo = source_from_config(&Config::default().with_demo_mode(true)).unwrap();
        assert_eq!(demo.describe(), "demo");

        let remote =
            source_from_config(&Config::default().with_backend_url("https://abc.example.co"))
                .unwrap();
        assert_eq!(remote.describe(), "abc.example.co");

        assert!(source_from_config(&Config::default()).is_err());
    }

    #[tokio::test]
    async fn test_completed_load_delivers_snapshot() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_library_load(Arc::new(DemoSource), 7, tx);

        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match msg {
            AppMessage::LibraryLoaded { load_id, snapshot } => {
                assert_eq!(load_id, 7);
                assert_eq!(snapshot.folders.len(), 3);
            }
        }
        assert_eq!(handle.load_id(), 7);
    }

    #[tokio::test]
    async fn test_cancelled_load_never_delivers() {
        let release = Arc::new(Notify::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_library_load(
            Arc::new(GatedSource {
                release: release.clone(),
            }),
            1,
            tx,
        );

        handle.cancel();
        assert!(handle.is_cancelled());
        release.notify_one();

        // Sender is dropped with the task, so recv yields None
        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(msg.is_none());
    }

    #[tokio::test]
    async fn test_dropping_handle_cancels() {
        let release = Arc::new(Notify::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_library_load(
            Arc::new(GatedSource {
                release: release.clone(),
            }),
            2,
            tx,
        );

        drop(handle);
        release.notify_one();

        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(msg.is_none());
    }
}
