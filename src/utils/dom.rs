//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Current vertical scroll position of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Lock or unlock page scrolling.
///
/// Used while the mobile menu or the image modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(document) = document()
        && let Some(body) = document.body()
    {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Smooth-scroll the section with the given id into view.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// Top offsets of every `<section id=...>` element, in document order.
///
/// Feeds the navbar's active-link computation.
pub fn section_offsets() -> Vec<(String, f64)> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    let mut offsets = Vec::new();
    for i in 0..sections.length() {
        if let Some(node) = sections.item(i)
            && let Ok(element) = node.dyn_into::<web_sys::HtmlElement>()
        {
            offsets.push((element.id(), element.offset_top() as f64));
        }
    }
    offsets
}
