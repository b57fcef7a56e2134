//! Search filtering over the fetched directory.
//!
//! A term matches an entry when the login contains it (case-insensitive)
//! or when the stringified id contains it. The id check is a substring
//! check, so `"2"` also matches ids like `12` or `200`.

use crate::models::DirectoryEntry;

/// Filter entries by the search term, preserving fetch order.
pub fn filter_entries(entries: &[DirectoryEntry], term: &str) -> Vec<DirectoryEntry> {
    // Blank (empty or whitespace-only) shows the whole directory
    if term.trim().is_empty() {
        return entries.to_vec();
    }

    let term_lower = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, term, &term_lower))
        .cloned()
        .collect()
}

fn matches(entry: &DirectoryEntry, term: &str, term_lower: &str) -> bool {
    entry.login.to_lowercase().contains(term_lower) || entry.id.to_string().contains(term)
}
