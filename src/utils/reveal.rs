//! Card reveal animation setup.
//!
//! The animation itself lives in CSS; [`init`] publishes its timing on the
//! document root once per page lifetime. Elements opt in with the
//! `data-reveal` attribute.

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging;

use super::dom;

/// CSS custom property holding the animation duration.
pub const DURATION_PROPERTY: &str = "--reveal-duration";

/// CSS custom property holding the animation easing.
pub const EASING_PROPERTY: &str = "--reveal-easing";

/// Root attribute marking the animation as initialized.
pub const READY_ATTRIBUTE: &str = "data-reveal-ready";

/// Reveal animation timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    pub duration_ms: u32,
    pub easing: &'static str,
}

/// A flag that can be claimed exactly once.
pub struct OnceFlag(AtomicBool);

impl OnceFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Returns `true` for the first caller only.
    pub fn claim(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for OnceFlag {
    fn default() -> Self {
        Self::new()
    }
}

static INITIALIZED: OnceFlag = OnceFlag::new();

/// Initialize the reveal animation.
///
/// Only the first call has any effect; it returns `true`. Later calls
/// return `false` without touching the DOM.
pub fn init(config: RevealConfig) -> bool {
    if !INITIALIZED.claim() {
        return false;
    }

    let Some(root) = dom::root_element() else {
        logging::warn!("reveal: no document root, animations left at CSS defaults");
        return true;
    };

    let style = root.style();
    let duration = format!("{}ms", config.duration_ms);
    for (property, value) in [
        (DURATION_PROPERTY, duration.as_str()),
        (EASING_PROPERTY, config.easing),
    ] {
        if let Err(err) = style.set_property(property, value) {
            logging::warn!("reveal: failed to set {}: {:?}", property, err);
        }
    }
    if let Err(err) = root.set_attribute(READY_ATTRIBUTE, "") {
        logging::warn!("reveal: failed to set {}: {:?}", READY_ATTRIBUTE, err);
    }
    true
}

/// Whether [`init`] has run.
pub fn is_initialized() -> bool {
    INITIALIZED.is_claimed()
}
