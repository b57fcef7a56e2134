//! Root application module.
//!
//! Contains the main App component, the [`DirectoryContext`] bridging the
//! view-model into Leptos signals, and application-level setup logic.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::DirectoryPage;
use crate::config::REVEAL;
use crate::core::{DirectoryEvent, DirectoryViewModel, HttpDirectorySource, activate};
use crate::models::{DirectoryEntry, LoadStatus};
use crate::utils::reveal;

// ============================================================================
// DirectoryContext
// ============================================================================

/// Reactive mirror of the [`DirectoryViewModel`].
///
/// The view-model stays the source of truth. The context subscribes to it
/// and copies every change into signals, and components call back into the
/// view-model through the methods here.
///
/// This struct is `Copy` because all fields are arena-backed handles.
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    /// Current load status.
    pub status: RwSignal<LoadStatus>,
    /// Entries matching the current search term, in fetch order.
    pub visible: RwSignal<Vec<DirectoryEntry>>,
    /// Search term as typed.
    pub search_term: RwSignal<String>,
    /// Entry shown in the detail overlay.
    pub selection: RwSignal<Option<DirectoryEntry>>,
    view_model: StoredValue<Rc<RefCell<DirectoryViewModel>>, LocalStorage>,
}

impl DirectoryContext {
    /// Creates a context around a fresh view-model in the `Loading` state.
    pub fn new() -> Self {
        let status = RwSignal::new(LoadStatus::Loading);
        let visible = RwSignal::new(Vec::new());
        let search_term = RwSignal::new(String::new());
        let selection = RwSignal::new(None);

        let view_model = Rc::new(RefCell::new(DirectoryViewModel::new()));
        view_model.borrow_mut().subscribe(move |event| match event {
            DirectoryEvent::StatusChanged(next) => status.set(*next),
            DirectoryEvent::FilterChanged { term, visible: entries } => {
                search_term.set(term.clone());
                visible.set(entries.clone());
            }
            DirectoryEvent::SelectionChanged(entry) => selection.set(entry.clone()),
        });

        Self {
            status,
            visible,
            search_term,
            selection,
            view_model: StoredValue::new_local(view_model),
        }
    }

    /// Starts the one directory fetch for this page.
    ///
    /// The request is not cancelled if the page goes away; its result is
    /// dropped instead.
    pub fn activate(&self) {
        let handle = self.view_model.with_value(Rc::downgrade);
        spawn_local(async move {
            let outcome = activate(handle, &HttpDirectorySource::default()).await;
            logging::log!("directory activation: {:?}", outcome);
        });
    }

    pub fn set_search_term(&self, term: String) {
        self.view_model
            .with_value(|vm| vm.borrow_mut().set_search_term(term));
    }

    pub fn select(&self, id: u64) {
        let result = self
            .view_model
            .with_value(|vm| vm.borrow_mut().select(id).map(|_| ()));
        if let Err(err) = result {
            logging::warn!("select ignored: {}", err);
        }
    }

    pub fn clear_selection(&self) {
        self.view_model
            .with_value(|vm| vm.borrow_mut().clear_selection());
    }
}

impl Default for DirectoryContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the [`DirectoryContext`]
/// - Initializes the reveal animation and starts the fetch, once
/// - Renders the directory page
#[component]
pub fn App() -> impl IntoView {
    let ctx = DirectoryContext::new();
    provide_context(ctx);

    let started = StoredValue::new(false);
    Effect::new(move || {
        if !started.get_value() {
            started.set_value(true);
            reveal::init(REVEAL);
            ctx.activate();
        }
    });

    view! { <DirectoryPage /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FETCH_FAILED_MESSAGE;
    use crate::core::error::FetchError;

    fn entry(id: u64, login: &str) -> DirectoryEntry {
        DirectoryEntry {
            id,
            login: login.to_string(),
            avatar_url: format!("{}.png", login),
            html_url: format!("u/{}", login),
        }
    }

    /// Runs the fetch lifecycle directly, bypassing the network.
    fn load(ctx: &DirectoryContext, result: Result<Vec<DirectoryEntry>, FetchError>) {
        ctx.view_model.with_value(|vm| {
            let mut vm = vm.borrow_mut();
            assert!(vm.begin_fetch());
            assert!(vm.finish_fetch(result));
        });
    }

    fn visible_ids(ctx: &DirectoryContext) -> Vec<u64> {
        ctx.visible.with_untracked(|v| v.iter().map(|e| e.id).collect())
    }

    fn selected_id(ctx: &DirectoryContext) -> Option<u64> {
        ctx.selection.with_untracked(|s| s.as_ref().map(|e| e.id))
    }

    #[test]
    fn test_signals_follow_view_model() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = DirectoryContext::new();
            assert_eq!(ctx.status.get_untracked(), LoadStatus::Loading);
            assert!(visible_ids(&ctx).is_empty());

            load(&ctx, Ok(vec![entry(1, "alice"), entry(2, "bob")]));
            assert_eq!(ctx.status.get_untracked(), LoadStatus::Ready);
            assert_eq!(visible_ids(&ctx), vec![1, 2]);
            assert_eq!(ctx.search_term.get_untracked(), "");

            ctx.set_search_term("2".to_string());
            assert_eq!(ctx.search_term.get_untracked(), "2");
            assert_eq!(visible_ids(&ctx), vec![2]);

            ctx.select(2);
            assert_eq!(selected_id(&ctx), Some(2));

            // Unknown ids leave the selection alone
            ctx.select(99);
            assert_eq!(selected_id(&ctx), Some(2));

            ctx.clear_selection();
            assert_eq!(selected_id(&ctx), None);

            ctx.set_search_term(String::new());
            assert_eq!(ctx.search_term.get_untracked(), "");
            assert_eq!(visible_ids(&ctx), vec![1, 2]);
        });
    }

    #[test]
    fn test_signals_on_failure() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = DirectoryContext::new();
            load(&ctx, Err(FetchError::HttpError(403)));

            assert_eq!(
                ctx.status.get_untracked(),
                LoadStatus::Failed(FETCH_FAILED_MESSAGE)
            );
            assert!(visible_ids(&ctx).is_empty());

            ctx.set_search_term("a".to_string());
            assert!(visible_ids(&ctx).is_empty());
            assert_eq!(ctx.search_term.get_untracked(), "a");
        });
    }
}
