//! Preview and open delegation.
//!
//! Documents are never rendered here. PDF-like files get a viewer URL shown
//! inline or in a full-screen modal; everything else is handed to the
//! platform opener.

use crate::models::{is_pdf_like, FileRecord, LibraryFile};
use crate::traits::{OpenError, UrlOpener};

/// What activating a file does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewAction {
    /// Flip the file's inline preview
    ToggleInline,
    /// Hand this URL to the platform opener
    OpenExternal(String),
    /// Not previewable and nothing to open
    Unavailable,
}

/// Result of an explicit "open outside the app".
#[derive(Debug, Clone, PartialEq)]
pub enum OpenOutcome {
    Opened,
    /// The opener failed; show the in-app modal instead
    FellBackToModal(OpenError),
    Failed(OpenError),
    NoUrl,
}

/// Substitute a percent-encoded file URL into a viewer template.
pub fn viewer_url(template: &str, file_url: &str) -> String {
    template.replace("{url}", &urlencoding::encode(file_url))
}

/// Decide what activating `file` should do.
pub fn resolve_activation(file: &FileRecord) -> PreviewAction {
    if is_pdf_like(file) {
        return PreviewAction::ToggleInline;
    }
    match file.link() {
        Some(url) => PreviewAction::OpenExternal(url.to_string()),
        None => PreviewAction::Unavailable,
    }
}

/// Hand a file's URL to the platform.
///
/// A PDF-like file that cannot be opened falls back to the in-app modal;
/// for anything else the failure is only reported.
pub fn open_externally(opener: &dyn UrlOpener, file: &FileRecord) -> OpenOutcome {
    let Some(url) = file.link() else {
        tracing::warn!("{} has no URL to open", file.name);
        return OpenOutcome::NoUrl;
    };

    match opener.open(url) {
        Ok(()) => {
            tracing::info!("Opened {} externally", file.name);
            OpenOutcome::Opened
        }
        Err(err) if is_pdf_like(file) => {
            tracing::warn!("Falling back to in-app preview for {}: {}", file.name, err);
            OpenOutcome::FellBackToModal(err)
        }
        Err(err) => {
            tracing::error!("Failed to open {}: {}", file.name, err);
            OpenOutcome::Failed(err)
        }
    }
}

/// Full-screen preview of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewModal {
    pub file: LibraryFile,
    /// Viewer URL, if the file has a URL at all
    pub viewer_url: Option<String>,
}

impl PreviewModal {
    pub fn new(file: &LibraryFile, viewer_template: &str) -> Self {
        Self {
            viewer_url: file.file.link().map(|url| viewer_url(viewer_template, url)),
            file: file.clone(),
        }
    }

    pub fn title(&self) -> &str {
        self.file.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockOpener;
    use crate::config::DEFAULT_VIEWER_URL;
    use chrono::Utc;

    fn record(name: &str, file_type: &str, url: Option<&str>) -> FileRecord {
        FileRecord {
            id: name.to_string(),
            name: name.to_string(),
            size: 1,
            file_type: file_type.to_string(),
            url: url.map(str::to_string),
            uploaded_at: Utc::now(),
            uploaded_by: String::new(),
        }
    }

    #[test]
    fn test_viewer_url_encodes_file_url() {
        let url = viewer_url(DEFAULT_VIEWER_URL, "https://cdn.example.com/a b.pdf?x=1&y=2");
        assert_eq!(
            url,
            "https://docs.google.com/viewer?url=https%3A%2F%2Fcdn.example.com%2Fa%20b.pdf%3Fx%3D1%26y%3D2&embedded=true"
        );
    }

    #[test]
    fn test_resolve_activation() {
        assert_eq!(
            resolve_activation(&record("score.pdf", "", None)),
            PreviewAction::ToggleInline
        );
        assert_eq!(
            resolve_activation(&record("take.mp3", "audio", Some("https://cdn.example.com/take.mp3"))),
            PreviewAction::OpenExternal("https://cdn.example.com/take.mp3".to_string())
        );
        assert_eq!(
            resolve_activation(&record("take.mp3", "audio", Some(" "))),
            PreviewAction::Unavailable
        );
    }

    #[test]
    fn test_open_externally_success() {
        let opener = MockOpener::new();
        let file = record("take.mp3", "audio", Some("https://cdn.example.com/take.mp3"));
        assert_eq!(open_externally(&opener, &file), OpenOutcome::Opened);
        assert_eq!(opener.opened(), vec!["https://cdn.example.com/take.mp3"]);
    }

    #[test]
    fn test_pdf_failure_falls_back_to_modal() {
        let opener = MockOpener::failing("no browser");
        let file = record("score.pdf", "pdf", Some("https://cdn.example.com/score.pdf"));
        assert!(matches!(
            open_externally(&opener, &file),
            OpenOutcome::FellBackToModal(_)
        ));
    }

    #[test]
    fn test_other_failure_is_reported() {
        let opener = MockOpener::failing("no player");
        let file = record("take.mp3", "audio", Some("https://cdn.example.com/take.mp3"));
        assert!(matches!(open_externally(&opener, &file), OpenOutcome::Failed(_)));
    }

    #[test]
    fn test_no_url_never_calls_opener() {
        let opener = MockOpener::new();
        assert_eq!(
            open_externally(&opener, &record("score.pdf", "pdf", None)),
            OpenOutcome::NoUrl
        );
        assert!(opener.opened().is_empty());
    }

    #[test]
    fn test_modal_viewer_url() {
        let lib_file = LibraryFile {
            subfolder_id: "s".to_string(),
            subfolder_name: "S".to_string(),
            file: record("score.pdf", "pdf", Some("https://cdn.example.com/score.pdf")),
        };
        let modal = PreviewModal::new(&lib_file, "https://view.example.com/?src={url}");
        assert_eq!(modal.title(), "score.pdf");
        assert_eq!(
            modal.viewer_url.as_deref(),
            Some("https://view.example.com/?src=https%3A%2F%2Fcdn.example.com%2Fscore.pdf")
        );
    }
}
