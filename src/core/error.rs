//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for the directory request
//! - [`DirectoryError`] - Invalid operations against the loaded directory

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, DNS, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Body is not the expected JSON shape
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// Errors raised by view-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No entry with this id exists in the current directory.
    #[error("no user with id {0} in the directory")]
    UnknownEntry(u64),
}
