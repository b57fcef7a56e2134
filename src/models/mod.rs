//! Data models and types for the application.
//!
//! - [`DirectoryEntry`] - A fetched GitHub user
//! - [`LoadStatus`] - Loading/Ready/Failed state of the directory view

mod directory;

pub use directory::{DirectoryEntry, LoadStatus};
