//! Directory sources.
//!
//! [`DirectorySource`] is the seam between the view-model driver and the
//! network. The browser build uses [`HttpDirectorySource`].

use super::error::FetchError;
use crate::config::USERS_ENDPOINT;
use crate::models::DirectoryEntry;
use crate::utils::fetch_json;

/// Something that can produce the full user directory.
#[allow(async_fn_in_trait)]
pub trait DirectorySource {
    async fn fetch(&self) -> Result<Vec<DirectoryEntry>, FetchError>;
}

/// Fetches the directory with a single GET against a JSON endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpDirectorySource {
    url: String,
}

impl HttpDirectorySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpDirectorySource {
    /// Source pointing at the configured users endpoint.
    fn default() -> Self {
        Self::new(USERS_ENDPOINT)
    }
}

impl DirectorySource for HttpDirectorySource {
    async fn fetch(&self) -> Result<Vec<DirectoryEntry>, FetchError> {
        fetch_json::<Vec<DirectoryEntry>>(&self.url).await
    }
}
