//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the `<html>` element.
pub fn root_element() -> Option<HtmlElement> {
    document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}
