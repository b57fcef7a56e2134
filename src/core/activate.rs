//! One-shot directory activation.
//!
//! Runs the single fetch for a view-model and hands the result back. The
//! view-model is held weakly across the await so a view torn down while the
//! request is in flight simply drops the result.

use std::cell::RefCell;
use std::rc::Weak;

use leptos::logging;

use super::source::DirectorySource;
use super::view_model::DirectoryViewModel;

/// Outcome of [`activate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The fetch ran and its result was applied.
    Applied,
    /// A fetch had already been claimed for this view.
    AlreadyStarted,
    /// The view-model was dropped before or during the fetch.
    Discarded,
}

/// Fetches the directory once and applies the result to the view-model.
pub async fn activate<S: DirectorySource>(
    view_model: Weak<RefCell<DirectoryViewModel>>,
    source: &S,
) -> Activation {
    {
        let Some(vm) = view_model.upgrade() else {
            return Activation::Discarded;
        };
        if !vm.borrow_mut().begin_fetch() {
            return Activation::AlreadyStarted;
        }
    }

    logging::log!("fetching user directory");
    let result = source.fetch().await;

    match view_model.upgrade() {
        Some(vm) => {
            vm.borrow_mut().finish_fetch(result);
            Activation::Applied
        }
        None => {
            logging::warn!("directory view dropped before fetch resolved, discarding result");
            Activation::Discarded
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::config::FETCH_FAILED_MESSAGE;
    use crate::core::error::FetchError;
    use crate::models::{DirectoryEntry, LoadStatus};

    struct StaticSource {
        result: Result<Vec<DirectoryEntry>, FetchError>,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(result: Result<Vec<DirectoryEntry>, FetchError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl DirectorySource for StaticSource {
        async fn fetch(&self) -> Result<Vec<DirectoryEntry>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Drops the view-model while the fetch is in flight.
    struct DroppingSource {
        victim: RefCell<Option<Rc<RefCell<DirectoryViewModel>>>>,
    }

    impl DirectorySource for DroppingSource {
        async fn fetch(&self) -> Result<Vec<DirectoryEntry>, FetchError> {
            self.victim.borrow_mut().take();
            Ok(vec![users()[0].clone()])
        }
    }

    fn users() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry {
                id: 1,
                login: "alice".to_string(),
                avatar_url: "a.png".to_string(),
                html_url: "u/a".to_string(),
            },
            DirectoryEntry {
                id: 2,
                login: "bob".to_string(),
                avatar_url: "b.png".to_string(),
                html_url: "u/b".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_activate_success() {
        let vm = Rc::new(RefCell::new(DirectoryViewModel::new()));
        let source = StaticSource::new(Ok(users()));

        let outcome = activate(Rc::downgrade(&vm), &source).await;
        assert_eq!(outcome, Activation::Applied);
        assert_eq!(vm.borrow().status(), LoadStatus::Ready);
        assert_eq!(vm.borrow().filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_activate_failure() {
        let vm = Rc::new(RefCell::new(DirectoryViewModel::new()));
        let source = StaticSource::new(Err(FetchError::HttpError(500)));

        activate(Rc::downgrade(&vm), &source).await;
        assert_eq!(
            vm.borrow().status(),
            LoadStatus::Failed(FETCH_FAILED_MESSAGE)
        );
        assert!(vm.borrow().filtered().is_empty());
    }

    #[tokio::test]
    async fn test_activate_runs_once() {
        let vm = Rc::new(RefCell::new(DirectoryViewModel::new()));
        let source = StaticSource::new(Ok(users()));

        assert_eq!(
            activate(Rc::downgrade(&vm), &source).await,
            Activation::Applied
        );
        assert_eq!(
            activate(Rc::downgrade(&vm), &source).await,
            Activation::AlreadyStarted
        );
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_activate_dropped_before_start() {
        let vm = Rc::new(RefCell::new(DirectoryViewModel::new()));
        let weak = Rc::downgrade(&vm);
        drop(vm);

        let source = StaticSource::new(Ok(users()));
        assert_eq!(activate(weak, &source).await, Activation::Discarded);
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_activate_dropped_in_flight() {
        let vm = Rc::new(RefCell::new(DirectoryViewModel::new()));
        let weak = Rc::downgrade(&vm);
        let source = DroppingSource {
            victim: RefCell::new(Some(vm)),
        };

        assert_eq!(activate(weak.clone(), &source).await, Activation::Discarded);
        assert!(weak.upgrade().is_none());
    }
}
