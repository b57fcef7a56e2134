//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::utils::reveal::RevealConfig;

// =============================================================================
// Application Metadata
// =============================================================================

/// Page heading.
pub const APP_TITLE: &str = "GitHub Users";

/// Footer line.
pub const FOOTER_TEXT: &str = "GitHub Users List | Powered by GitHub API";

// =============================================================================
// Network Configuration
// =============================================================================

/// Users collection endpoint.
///
/// Override at build time with `GH_USERS_ENDPOINT=... trunk build`.
pub const USERS_ENDPOINT: &str = match option_env!("GH_USERS_ENDPOINT") {
    Some(url) => url,
    None => "https://api.github.com/users",
};

/// Message shown in place of the grid when the fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

// =============================================================================
// UI Text
// =============================================================================

pub mod text {
    /// Shown while the directory is loading.
    pub const LOADING: &str = "Loading...";
    /// Search input placeholder.
    pub const SEARCH_PLACEHOLDER: &str = "Search by username or ID...";
    /// Shown when the filter matches nothing.
    pub const NO_RESULTS: &str = "No users found.";
    /// Label for profile links.
    pub const PROFILE_LINK: &str = "Profile URL";
}

// =============================================================================
// Animation Configuration
// =============================================================================

/// Card reveal animation timing.
pub const REVEAL: RevealConfig = RevealConfig {
    duration_ms: 1000,
    easing: "ease-out",
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
