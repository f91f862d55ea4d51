//! Read-only client for the hosted library backend.
//!
//! The backend exposes each table over a PostgREST-style endpoint:
//! `GET {base}/rest/v1/{table}?select=*&order=created_at.desc`, authorised
//! with the project's anonymous key in both the `apikey` header and a bearer
//! token.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::config::{Config, ConfigError};
use crate::error::{FolioError, FolioResult};
use crate::models::{Folder, LibraryFile, Subfolder};
use crate::traits::{Headers, HttpClient, LibrarySource};

pub const FOLDERS_TABLE: &str = "folders";
pub const SUBFOLDERS_TABLE: &str = "subfolders";

/// Longest slice of an error body we keep in a message.
const MAX_ERROR_BODY: usize = 200;

/// One collection that failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub collection: String,
    pub code: &'static str,
    pub message: String,
}

impl LoadFailure {
    fn from_error(collection: &str, err: &FolioError) -> Self {
        Self {
            collection: collection.to_string(),
            code: err.error_code(),
            message: err.user_message(),
        }
    }
}

/// Everything one load produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibrarySnapshot {
    pub folders: Vec<Folder>,
    pub subfolders: Vec<Subfolder>,
    /// Every subfolder's embedded files, flattened in subfolder order
    pub files: Vec<LibraryFile>,
    pub failures: Vec<LoadFailure>,
}

impl LibrarySnapshot {
    /// Build a snapshot from already-fetched rows.
    pub fn from_rows(folders: Vec<Folder>, subfolders: Vec<Subfolder>) -> Self {
        let files = flatten_files(&subfolders);
        Self {
            folders,
            subfolders,
            files,
            failures: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Lift every subfolder's embedded files into one list, stamping each with
/// its parent's id and name. Order: subfolders in the given order, files in
/// their embedded order.
pub fn flatten_files(subfolders: &[Subfolder]) -> Vec<LibraryFile> {
    subfolders
        .iter()
        .flat_map(|subfolder| {
            subfolder.files.iter().map(move |file| LibraryFile {
                subfolder_id: subfolder.id.clone(),
                subfolder_name: subfolder.name.clone(),
                file: file.clone(),
            })
        })
        .collect()
}

/// Client for the folders and subfolders tables.
pub struct LibraryClient<C: HttpClient> {
    /// Project base URL, without trailing slash
    pub base_url: String,
    api_key: Option<String>,
    http: C,
}

impl LibraryClient<ReqwestHttpClient> {
    /// Build a production client from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let base_url = config
            .backend_url
            .clone()
            .ok_or(ConfigError::MissingBackendUrl)?;
        let http =
            ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs));
        let mut client = Self::new(base_url, http);
        client.api_key = config.api_key.clone();
        Ok(client)
    }
}

impl<C: HttpClient> LibraryClient<C> {
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            http,
        }
    }

    /// Set the API key sent with every request.
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// URL listing every row of `table`, newest first.
    pub fn collection_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=created_at.desc",
            self.base_url, table
        )
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(ref key) = self.api_key {
            headers.insert("apikey".to_string(), key.clone());
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
        }
        headers
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, table: &str) -> FolioResult<Vec<T>> {
        let url = self.collection_url(table);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url, &self.headers())
            .await
            .map_err(|source| FolioError::Http {
                collection: table.to_string(),
                source,
            })?;

        if !response.is_success() {
            let body = response.text();
            return Err(FolioError::Server {
                collection: table.to_string(),
                status: response.status,
                message: error_message_from_body(&body),
            });
        }

        response.json::<Vec<T>>().map_err(|source| FolioError::Decode {
            collection: table.to_string(),
            source,
        })
    }

    /// All folders, newest first.
    pub async fn fetch_folders(&self) -> FolioResult<Vec<Folder>> {
        self.fetch_rows(FOLDERS_TABLE).await
    }

    /// All subfolders with their embedded files, newest first.
    pub async fn fetch_subfolders(&self) -> FolioResult<Vec<Subfolder>> {
        self.fetch_rows(SUBFOLDERS_TABLE).await
    }

    /// Fetch both tables concurrently and wait for both.
    ///
    /// Best effort: a failed request is logged and contributes an empty list,
    /// while the other request's rows are kept. Nothing is retried.
    pub async fn load_library(&self) -> LibrarySnapshot {
        let (folders, subfolders) = tokio::join!(self.fetch_folders(), self.fetch_subfolders());

        let mut failures = Vec::new();

        let folders = folders.unwrap_or_else(|err| {
            tracing::error!(code = err.error_code(), "Failed to load folders: {}", err);
            failures.push(LoadFailure::from_error(FOLDERS_TABLE, &err));
            Vec::new()
        });

        let subfolders = subfolders.unwrap_or_else(|err| {
            tracing::error!(code = err.error_code(), "Failed to load subfolders: {}", err);
            failures.push(LoadFailure::from_error(SUBFOLDERS_TABLE, &err));
            Vec::new()
        });

        let mut snapshot = LibrarySnapshot::from_rows(folders, subfolders);
        snapshot.failures = failures;

        tracing::info!(
            "Library loaded: {} folders, {} subfolders, {} files ({} failures)",
            snapshot.folders.len(),
            snapshot.subfolders.len(),
            snapshot.files.len(),
            snapshot.failures.len()
        );
        snapshot
    }
}

#[async_trait]
impl<C: HttpClient + 'static> LibrarySource for LibraryClient<C> {
    async fn load(&self) -> LibrarySnapshot {
        self.load_library().await
    }

    fn describe(&self) -> String {
        self.base_url
            .split("://")
            .nth(1)
            .unwrap_or(&self.base_url)
            .to_string()
    }
}

/// Pull a readable message out of an error body.
///
/// PostgREST answers with `{"message": "...", "code": "..."}`; anything else is
/// passed through, truncated.
fn error_message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        return "Unknown error".to_string();
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}
