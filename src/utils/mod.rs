//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`Observers`] - Listener list for change notifications
//! - [`fetch_json`] - Network fetching via the browser Fetch API
//! - [`reveal`] - Run-once card animation setup

pub mod dom;
mod fetch;
mod observers;
pub mod reveal;

pub use fetch::{fetch_json, parse_json};
pub use observers::{Observers, SubscriptionId};
