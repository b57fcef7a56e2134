//! GitHub user directory page.
//!
//! Fetches the public user list once, filters it locally by login or id,
//! and shows a detail overlay for the selected user.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
