//! [`HttpClient`] over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production HTTP client. Cloning shares the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose requests give up after `timeout`.
    ///
    /// If the builder rejects the settings the default client is used and a
    /// warning is logged.
    pub fn with_timeout(timeout: Duration) -> Self {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => Self { client },
            Err(e) => {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Self::default()
            }
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else {
            HttpError::Other(message)
        }
    }
}

fn lowercase_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| request.header(name, value));

        let response = request.send().await?;
        let status = response.status().as_u16();
        let response_headers = lowercase_headers(response.headers());
        let body = response.bytes().await?;

        tracing::trace!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(Response::with_headers(status, response_headers, body))
    }
}
