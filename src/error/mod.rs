//! Error handling for folio.
//!
//! - **Error Categories**: coarse classification used for status lines and logs
//! - **Unified Error Type**: `FolioError` wraps transport, backend, decode,
//!   opener and configuration failures
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! Failures are never retried. A failed fetch leaves the affected list empty,
//! a failed open leaves the view unchanged; both are logged.

mod category;
mod folio_error;

pub use category::ErrorCategory;
pub use folio_error::FolioError;

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;
