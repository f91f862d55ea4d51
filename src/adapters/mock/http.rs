//! In-memory [`HttpClient`] for tests.
//!
//! Routes are URL prefixes. An exact match wins, then the longest matching
//! prefix, then the fallback. Every call is recorded.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One `get` call as the client saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What a route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// A response of any status
    Success(Response),
    /// A transport failure
    Error(HttpError),
}

impl MockResponse {
    /// 200 with `json` as the body.
    pub fn json(json: &str) -> Self {
        Self::status(200, json)
    }

    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }
}

#[derive(Debug, Default)]
struct Routes {
    by_prefix: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    seen: Vec<RecordedRequest>,
}

impl Routes {
    fn resolve(&self, url: &str) -> Option<MockResponse> {
        if let Some(exact) = self.by_prefix.get(url) {
            return Some(exact.clone());
        }
        // "/folders" must not answer for "/subfolders"
        self.by_prefix
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone())
            .or_else(|| self.fallback.clone())
    }
}

/// Cloning shares routes and the request log.
///
/// ```ignore
/// let mock = MockHttpClient::new();
/// mock.set_response("https://db.example.com/rest/v1/folders", MockResponse::json("[]"));
/// let client = LibraryClient::new("https://db.example.com", mock.clone());
/// client.fetch_folders().await?;
/// assert_eq!(mock.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs starting with `prefix`.
    pub fn set_response(&self, prefix: &str, response: MockResponse) {
        self.routes
            .lock()
            .unwrap()
            .by_prefix
            .insert(prefix.to_string(), response);
    }

    /// Answer every URL no route matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.routes.lock().unwrap().fallback = Some(response);
    }

    /// Calls so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.routes.lock().unwrap().seen.clone()
    }

    pub fn clear_requests(&self) {
        self.routes.lock().unwrap().seen.clear();
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut routes = self.routes.lock().unwrap();
        routes.seen.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match routes.resolve(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock route for {}", url))),
        }
    }
}
