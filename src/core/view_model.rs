//! Directory view-model.
//!
//! Holds the fetched directory, the search term, the derived filtered view
//! and the current selection. Rendering layers observe it through
//! [`DirectoryViewModel::subscribe`] and drive it through the search and
//! selection operations.

use leptos::logging;

use super::error::{DirectoryError, FetchError};
use super::filter::filter_entries;
use crate::config::FETCH_FAILED_MESSAGE;
use crate::models::{DirectoryEntry, LoadStatus};
use crate::utils::{Observers, SubscriptionId};

/// Change notifications published by the view-model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// Status left `Loading`.
    StatusChanged(LoadStatus),
    /// The filtered view was recomputed.
    FilterChanged {
        term: String,
        visible: Vec<DirectoryEntry>,
    },
    /// Selection opened, replaced or cleared.
    SelectionChanged(Option<DirectoryEntry>),
}

/// State of one directory view.
pub struct DirectoryViewModel {
    status: LoadStatus,
    directory: Vec<DirectoryEntry>,
    filtered: Vec<DirectoryEntry>,
    search_term: String,
    selection: Option<DirectoryEntry>,
    fetch_claimed: bool,
    observers: Observers<DirectoryEvent>,
}

impl DirectoryViewModel {
    /// Creates an empty view in the `Loading` state.
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            directory: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            selection: None,
            fetch_claimed: false,
            observers: Observers::new(),
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn directory(&self) -> &[DirectoryEntry] {
        &self.directory
    }

    pub fn filtered(&self) -> &[DirectoryEntry] {
        &self.filtered
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selection(&self) -> Option<&DirectoryEntry> {
        self.selection.as_ref()
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(&DirectoryEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// Claims the single fetch allowed for this view.
    ///
    /// Returns `false` if a fetch was already claimed.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_claimed {
            return false;
        }
        self.fetch_claimed = true;
        true
    }

    /// Applies the fetch result.
    ///
    /// Only the first result leaves `Loading`; any later call is ignored and
    /// returns `false`.
    pub fn finish_fetch(&mut self, result: Result<Vec<DirectoryEntry>, FetchError>) -> bool {
        if self.status.is_terminal() {
            logging::warn!("directory already settled ({:?}), ignoring fetch result", self.status);
            return false;
        }

        match result {
            Ok(entries) => {
                logging::log!("directory loaded: {} users", entries.len());
                self.directory = entries;
                self.status = LoadStatus::Ready;
                self.observers
                    .notify(&DirectoryEvent::StatusChanged(self.status));
                self.refilter();
            }
            Err(err) => {
                logging::error!("directory fetch failed: {}", err);
                self.status = LoadStatus::Failed(FETCH_FAILED_MESSAGE);
                self.observers
                    .notify(&DirectoryEvent::StatusChanged(self.status));
            }
        }
        true
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Stores the term verbatim and recomputes the filtered view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_entries(&self.directory, &self.search_term);
        self.observers.notify(&DirectoryEvent::FilterChanged {
            term: self.search_term.clone(),
            visible: self.filtered.clone(),
        });
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Opens the entry with the given id, replacing any prior selection.
    pub fn select(&mut self, id: u64) -> Result<&DirectoryEntry, DirectoryError> {
        let index = self
            .directory
            .iter()
            .position(|e| e.id == id)
            .ok_or(DirectoryError::UnknownEntry(id))?;

        let entry = self.directory[index].clone();
        self.selection = Some(entry.clone());
        self.observers
            .notify(&DirectoryEvent::SelectionChanged(Some(entry)));
        Ok(&self.directory[index])
    }

    /// Closes the current selection. Does nothing if none is open.
    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.observers
                .notify(&DirectoryEvent::SelectionChanged(None));
        }
    }
}

impl Default for DirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}
