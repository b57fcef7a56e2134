//! UI components built with Leptos.
//!
//! - [`directory`] - Directory page: search, grid and detail overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod directory;
pub mod icons;

pub use directory::DirectoryPage;
