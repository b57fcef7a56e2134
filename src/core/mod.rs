//! Core logic for the user directory.
//!
//! This module provides:
//! - [`DirectoryViewModel`] holding directory, search and selection state
//! - [`DirectorySource`] and [`HttpDirectorySource`] for fetching users
//! - [`activate`] running the single fetch for a view
//! - [`filter_entries`] search matching

mod activate;
pub mod error;
mod filter;
mod source;
mod view_model;

pub use activate::{Activation, activate};
pub use filter::filter_entries;
pub use source::{DirectorySource, HttpDirectorySource};
pub use view_model::{DirectoryEvent, DirectoryViewModel};
