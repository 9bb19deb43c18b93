//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
#[inline]
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Add or remove a class on the `<html>` element.
///
/// Returns `false` if the document is unavailable or the class list rejects the change.
pub fn set_root_class(class: &str, present: bool) -> bool {
    let Some(root) = document_element() else {
        return false;
    };
    let classes = root.class_list();
    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.is_ok()
}

/// Whether the media query currently matches. `false` outside a browser.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}
