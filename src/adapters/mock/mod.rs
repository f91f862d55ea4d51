//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockOpener`] - URL opener that records calls

pub mod http;
pub mod opener;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use opener::MockOpener;
