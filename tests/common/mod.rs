//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! let (app, opener) = common::loaded_app();
//! ```

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use folio::adapters::MockOpener;
use folio::app::App;
use folio::config::Config;
use folio::demo::{sample_library, DemoSource};
use folio::models::{FileRecord, LibraryFile};

/// An app over the demo source with the sample library applied and a
/// recording opener.
pub fn loaded_app() -> (App, MockOpener) {
    let opener = MockOpener::new();
    let mut app = App::new(
        Config::default().with_demo_mode(true),
        Arc::new(DemoSource),
        Arc::new(opener.clone()),
    );
    app.library.apply_snapshot(sample_library());
    (app, opener)
}

/// A file in subfolder `sub` with the given name and type tag.
pub fn library_file(id: &str, name: &str, file_type: &str) -> LibraryFile {
    LibraryFile {
        subfolder_id: "sub".to_string(),
        subfolder_name: "Sub".to_string(),
        file: FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            size: 1024,
            file_type: file_type.to_string(),
            url: Some(format!("https://files.example.com/{}", id)),
            uploaded_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            uploaded_by: "librarian".to_string(),
        },
    }
}

/// Rows of the `folders` table as the backend returns them.
pub fn folder_rows() -> Value {
    json!([
        {
            "id": 2,
            "name": "Brass Quintet",
            "description": null,
            "subfolder_count": 1,
            "created_at": "2024-04-02T10:00:00Z"
        },
        {
            "id": 1,
            "name": "Wind Band",
            "description": "Concert band library",
            "subfolder_count": 0,
            "created_at": "2024-03-01T09:30:00+00:00"
        }
    ])
}

/// Rows of the `subfolders` table, files embedded.
pub fn subfolder_rows() -> Value {
    json!([
        {
            "id": 10,
            "name": "Holiday Pops",
            "description": "December program",
            "folder_id": 2,
            "created_at": "2024-04-03T08:00:00Z",
            "files": [
                {
                    "id": "a",
                    "name": "Sleigh Ride.PDF",
                    "size": 20480,
                    "type": "application/pdf",
                    "url": "https://cdn.example.com/sleigh.pdf",
                    "uploaded_at": "2024-04-03T08:05:00Z",
                    "uploaded_by": "alex"
                },
                {
                    "id": "b",
                    "name": "Sleigh Ride.mp3",
                    "size": 3145728,
                    "type": "audio",
                    "url": "https://cdn.example.com/sleigh.mp3",
                    "uploaded_at": "2024-04-03T08:06:00Z",
                    "uploaded_by": "alex"
                }
            ]
        },
        {
            "id": 11,
            "name": "Empty Set",
            "folder_id": 2,
            "created_at": "2024-04-04T08:00:00Z",
            "files": null
        }
    ])
}
