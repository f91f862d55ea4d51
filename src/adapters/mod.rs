//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemOpener`] - platform URL opener using `open` and `webbrowser`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockOpener`] - Records opened URLs, can be told to fail

pub mod mock;
pub mod reqwest_http;
pub mod system_opener;

pub use mock::{MockHttpClient, MockOpener};
pub use reqwest_http::ReqwestHttpClient;
pub use system_opener::SystemOpener;
