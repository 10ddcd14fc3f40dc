// ============================================================================
// ELEMENT HELPERS - Thin wrappers over web-sys DOM access
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// The global window, if running in a browser context.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document.
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up an element by id.
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Create a detached element.
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Replace an element's markup.
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Append a child element.
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}
