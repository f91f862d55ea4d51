//! File records embedded in subfolder rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_null_default};

/// A file as stored in a subfolder's embedded `files` array.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FileRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    /// Size in bytes
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub size: u64,
    /// Free-form type tag ("pdf", "audio", "video", a MIME type, ...)
    #[serde(
        rename = "type",
        alias = "file_type",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub file_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(
        default,
        alias = "uploadedBy",
        deserialize_with = "deserialize_null_default"
    )]
    pub uploaded_by: String,
}

impl FileRecord {
    pub fn kind(&self) -> FileKind {
        FileKind::classify(&self.file_type, &self.name)
    }

    /// The URL, if the record has a non-blank one.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// A file lifted out of its subfolder, stamped with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryFile {
    pub subfolder_id: String,
    pub subfolder_name: String,
    pub file: FileRecord,
}

impl LibraryFile {
    pub fn id(&self) -> &str {
        &self.file.id
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn kind(&self) -> FileKind {
        self.file.kind()
    }
}

/// Display classification of a file's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    Pdf,
    Audio,
    Video,
    Image,
    Document,
    Other,
}

impl FileKind {
    pub const ALL: [FileKind; 6] = [
        FileKind::Pdf,
        FileKind::Audio,
        FileKind::Video,
        FileKind::Image,
        FileKind::Document,
        FileKind::Other,
    ];

    /// Classify by type tag first, then by filename extension.
    pub fn classify(type_tag: &str, name: &str) -> Self {
        let tag = type_tag.trim().to_lowercase();
        let by_tag = match tag.as_str() {
            "pdf" | "application/pdf" => Some(FileKind::Pdf),
            "audio" | "mp3" | "wav" | "m4a" | "flac" | "ogg" | "aac" => Some(FileKind::Audio),
            "video" | "mp4" | "mov" | "webm" | "mkv" => Some(FileKind::Video),
            "image" | "png" | "jpg" | "jpeg" | "gif" => Some(FileKind::Image),
            "document" | "doc" | "docx" | "txt" | "musicxml" | "xml" => Some(FileKind::Document),
            t if t.starts_with("audio/") => Some(FileKind::Audio),
            t if t.starts_with("video/") => Some(FileKind::Video),
            t if t.starts_with("image/") => Some(FileKind::Image),
            t if t.starts_with("text/") => Some(FileKind::Document),
            _ => None,
        };
        if let Some(kind) = by_tag {
            return kind;
        }

        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => FileKind::Pdf,
            "mp3" | "wav" | "m4a" | "flac" | "ogg" | "aac" => FileKind::Audio,
            "mp4" | "mov" | "webm" | "mkv" => FileKind::Video,
            "png" | "jpg" | "jpeg" | "gif" | "webp" => FileKind::Image,
            "doc" | "docx" | "txt" | "musicxml" | "mxl" => FileKind::Document,
            _ => FileKind::Other,
        }
    }

    /// Glyph shown in front of the file name.
    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📄",
            FileKind::Audio => "🎵",
            FileKind::Video => "🎬",
            FileKind::Image => "🖼",
            FileKind::Document => "📝",
            FileKind::Other => "📎",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Audio => "Audio",
            FileKind::Video => "Video",
            FileKind::Image => "Image",
            FileKind::Document => "Document",
            FileKind::Other => "Other",
        }
    }
}

/// Whether a file should go to the document previewer.
///
/// True when either the type tag says PDF or the name ends in `.pdf`,
/// ignoring case. Unlike [`FileKind::classify`], a contradicting tag does not
/// win over the suffix.
pub fn is_pdf_like(file: &FileRecord) -> bool {
    file.file_type.to_lowercase().contains("pdf") || file.name.to_lowercase().ends_with(".pdf")
}
