// ============================================================================
// SETTINGS VIEW - The preferences page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{set_inner_html, Template};
use crate::views::View;

const TEMPLATE_ID: &str = "settingsview-tpl";

/// The settings page. Could host identity handling or user preferences.
pub struct SettingsView {
    container: Element,
    template: Template,
}

impl SettingsView {
    pub fn new(container: Element) -> Result<Self, JsValue> {
        Ok(Self {
            template: Template::from_document(TEMPLATE_ID)?,
            container,
        })
    }
}

impl View for SettingsView {
    fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.container, self.template.markup());
        Ok(())
    }
}
