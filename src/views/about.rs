// ============================================================================
// ABOUT VIEW - Static information about the app
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{set_inner_html, Template};
use crate::views::View;

const TEMPLATE_ID: &str = "aboutview-tpl";

/// The about page: author, version and similar static information.
pub struct AboutView {
    container: Element,
    template: Template,
}

impl AboutView {
    pub fn new(container: Element) -> Result<Self, JsValue> {
        Ok(Self {
            template: Template::from_document(TEMPLATE_ID)?,
            container,
        })
    }
}

impl View for AboutView {
    fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.container, self.template.markup());
        Ok(())
    }
}
