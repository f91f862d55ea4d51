//! Built-in sample library for `--demo` runs.
//!
//! Lets the browser be tried without a backend project. The data never
//! touches the network.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::backend::LibrarySnapshot;
use crate::models::{FileRecord, Folder, Subfolder};
use crate::traits::LibrarySource;

const SAMPLE_HOST: &str = "https://files.example.com/library";

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn file(id: &str, name: &str, size: u64, file_type: &str, uploaded: DateTime<Utc>) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        file_type: file_type.to_string(),
        url: Some(format!("{}/{}", SAMPLE_HOST, urlencoding::encode(name))),
        uploaded_at: uploaded,
        uploaded_by: "Library Admin".to_string(),
    }
}

fn folder(id: &str, name: &str, description: &str, subfolders: u32, created: DateTime<Utc>) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        subfolder_count: subfolders,
        created_at: created,
    }
}

fn subfolder(
    id: &str,
    folder_id: &str,
    name: &str,
    files: Vec<FileRecord>,
    created: DateTime<Utc>,
) -> Subfolder {
    Subfolder {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        folder_id: folder_id.to_string(),
        files,
        created_at: created,
    }
}

/// The sample library, newest rows first like the backend returns them.
pub fn sample_library() -> LibrarySnapshot {
    let folders = vec![
        folder("jazz", "Jazz Ensemble", "Charts and play-alongs", 1, at(2024, 3, 2)),
        folder("choir", "Chamber Choir", "Octavos and rehearsal tracks", 1, at(2024, 2, 11)),
        folder("orch", "Symphony Orchestra", "Full scores and parts", 2, at(2024, 1, 8)),
    ];

    let subfolders = vec![
        subfolder(
            "jazz-blues",
            "jazz",
            "Blues Standards",
            vec![
                file("j1", "Take the A Train - Lead Sheet.pdf", 182_400, "pdf", at(2024, 3, 4)),
                file("j2", "A Train Play-Along.mp3", 6_291_456, "audio", at(2024, 3, 4)),
            ],
            at(2024, 3, 3),
        ),
        subfolder(
            "choir-spring",
            "choir",
            "Spring Concert",
            vec![
                file("c1", "Ave Verum - Rehearsal.mp3", 4_404_019, "audio", at(2024, 2, 20)),
                file("c2", "Ave Verum Corpus.pdf", 96_256, "pdf", at(2024, 2, 18)),
                file("c3", "Diction Guide.docx", 24_576, "document", at(2024, 2, 18)),
            ],
            at(2024, 2, 12),
        ),
        subfolder(
            "orch-mozart",
            "orch",
            "Mozart Symphony No. 40",
            vec![],
            at(2024, 1, 15),
        ),
        subfolder(
            "orch-beethoven",
            "orch",
            "Beethoven Symphony No. 5",
            vec![
                file("b1", "Full Score.pdf", 5_347_737, "pdf", at(2024, 1, 10)),
                file("b2", "Violin I.pdf", 1_258_291, "pdf", at(2024, 1, 10)),
                file("b3", "Sectional Recording.mp4", 157_286_400, "video", at(2024, 1, 12)),
                file("b4", "Seating Chart.png", 348_160, "image", at(2024, 1, 9)),
            ],
            at(2024, 1, 9),
        ),
    ];

    LibrarySnapshot::from_rows(folders, subfolders)
}

/// Library source backed by [`sample_library`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

#[async_trait]
impl LibrarySource for DemoSource {
    async fn load(&self) -> LibrarySnapshot {
        tracing::info!("Loading built-in sample library");
        sample_library()
    }

    fn describe(&self) -> String {
        "demo".to_string()
    }
}
