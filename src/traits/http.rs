//! The read-only HTTP seam between the backend client and the network.
//!
//! The library never writes, so the trait is a single `get`. Production code
//! plugs in [`crate::adapters::ReqwestHttpClient`]; tests plug in
//! [`crate::adapters::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// Request or response headers, lower-case names on responses.
pub type Headers = HashMap<String, String>;

/// A fully buffered response. Status is not interpreted here.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value by name, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The body as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport failures. A response with any status is not an error here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    ConnectionFailed(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and buffer the whole body.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(206, Bytes::new()).is_success());
        assert!(!Response::new(304, Bytes::new()).is_success());
        assert!(!Response::new(401, Bytes::new()).is_success());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut headers = Headers::new();
        headers.insert("content-range".to_string(), "0-1/2".to_string());
        let response = Response::with_headers(200, headers, Bytes::new());
        assert_eq!(response.header("Content-Range"), Some("0-1/2"));
        assert_eq!(response.header("etag"), None);
    }

    #[test]
    fn test_rows_decode() {
        #[derive(Debug, serde::Deserialize)]
        struct Row {
            id: String,
        }

        let response = Response::new(200, Bytes::from(r#"[{"id":"f1"},{"id":"f2"}]"#));
        let rows: Vec<Row> = response.json().unwrap();
        assert_eq!(rows[1].id, "f2");
        assert_eq!(Response::new(500, Bytes::from_static(b"\xffoops")).text(), "\u{fffd}oops");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "could not connect: refused"
        );
        assert_eq!(HttpError::Timeout("30s".to_string()).to_string(), "timed out: 30s");
    }
}
