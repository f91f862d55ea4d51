//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - read-only HTTP access to the backend
//! - [`UrlOpener`] - handing a URL to the platform outside the app
//! - [`LibrarySource`] - producing a library snapshot

pub mod http;
pub mod library;
pub mod opener;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use library::LibrarySource;
pub use opener::{validate_url, OpenError, UrlOpener};
