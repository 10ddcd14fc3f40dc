// ============================================================================
// TEMPLATES - Markup sources captured from the host document
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::get_element_by_id;

/// A view's markup source, captured once from the host document.
///
/// Templates live in the page as `<script type="text/template">` elements.
/// A missing template is a deployment defect, surfaced as an error when the
/// owning view is first created.
pub struct Template {
    source: String,
}

impl Template {
    /// Capture the template with the given element id.
    pub fn from_document(id: &str) -> Result<Self, JsValue> {
        let element = get_element_by_id(id).ok_or_else(|| {
            JsValue::from_str(&format!("Template #{} not found in document", id))
        })?;

        Ok(Self {
            source: element.inner_html(),
        })
    }

    /// The raw markup.
    pub fn markup(&self) -> &str {
        &self.source
    }
}
