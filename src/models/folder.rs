use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::file::FileRecord;
use super::{deserialize_id, deserialize_null_default};

/// A top-level folder row.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Folder {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Denormalised count maintained by the backend
    #[serde(
        default,
        alias = "subfolderCount",
        deserialize_with = "deserialize_null_default"
    )]
    pub subfolder_count: u32,
    #[serde(default, alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A subfolder row, carrying its files as an embedded array.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Subfolder {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Parent folder id. Not enforced client-side.
    #[serde(alias = "folderId", alias = "parent_id", deserialize_with = "deserialize_id")]
    pub folder_id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub files: Vec<FileRecord>,
    #[serde(default, alias = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Subfolder {
    /// Sum of the embedded files' sizes in bytes.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_deserialize() {
        let json = r#"{
            "id": "f-1",
            "name": "Symphonies",
            "description": "Full orchestra",
            "subfolder_count": 4,
            "created_at": "2024-01-15T10:30:00+00:00"
        }"#;

        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, "f-1");
        assert_eq!(folder.name, "Symphonies");
        assert_eq!(folder.description.as_deref(), Some("Full orchestra"));
        assert_eq!(folder.subfolder_count, 4);
        assert_eq!(folder.created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_folder_camel_case_and_nulls() {
        let json = r#"{
            "id": 7,
            "name": "Chamber",
            "description": null,
            "subfolderCount": null,
            "createdAt": "2024-02-01T00:00:00Z"
        }"#;

        let folder: Folder = serde_json::from_str(json).unwrap();
        assert_eq!(folder.id, "7");
        assert!(folder.description.is_none());
        assert_eq!(folder.subfolder_count, 0);
    }

    #[test]
    fn test_subfolder_with_embedded_files() {
        let json = r#"{
            "id": "s-1",
            "name": "Beethoven 5",
            "folder_id": "f-1",
            "files": [
                {"id": "a", "name": "Violin I.pdf", "size": 2048, "type": "pdf",
                 "url": "https://cdn.example.com/v1.pdf",
                 "uploaded_at": "2024-01-16T09:00:00Z", "uploaded_by": "Ms. Rivera"},
                {"id": "b", "name": "Recording.mp3", "size": 1024, "type": "audio"}
            ],
            "created_at": "2024-01-16T08:00:00Z"
        }"#;

        let subfolder: Subfolder = serde_json::from_str(json).unwrap();
        assert_eq!(subfolder.folder_id, "f-1");
        assert_eq!(subfolder.files.len(), 2);
        assert_eq!(subfolder.files[0].uploaded_by, "Ms. Rivera");
        assert_eq!(subfolder.total_size(), 3072);
    }

    #[test]
    fn test_subfolder_null_files() {
        let json = r#"{"id": "s-2", "name": "Empty", "folderId": "f-1", "files": null}"#;
        let subfolder: Subfolder = serde_json::from_str(json).unwrap();
        assert!(subfolder.files.is_empty());
        assert_eq!(subfolder.folder_id, "f-1");
    }
}
