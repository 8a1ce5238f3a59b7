//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, Storage, Window};

use crate::models::Size;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Inner size of the browser window in CSS pixels.
///
/// Falls back to zero when unavailable; clamping then pins the menu to the
/// viewport margin.
pub fn viewport_size() -> Size {
    let Some(window) = window() else {
        return Size::default();
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Trigger a browser download of `url` saved as `file_name`.
pub fn click_download(url: &str, file_name: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = document().ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

/// Millisecond timestamp used as the id of newly added records.
pub fn timestamp_id() -> String {
    format!("{}", js_sys::Date::now() as u64)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}
