// ============================================================================
// HOME VIEW - The notes list page
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{set_inner_html, EventBinding, Template};
use crate::views::View;

const TEMPLATE_ID: &str = "homeview-tpl";

/// The home page: the list of notes taken so far. While active it greets on
/// clicks of any button inside the container.
pub struct HomeView {
    container: Element,
    template: Template,
    greeter: Rc<dyn Fn()>,
    greet_binding: Option<EventBinding>,
}

impl HomeView {
    pub fn new(container: Element) -> Result<Self, JsValue> {
        Self::with_greeter(container, Rc::new(greet))
    }

    /// Same as [`HomeView::new`] but with a custom greeting action.
    pub fn with_greeter(container: Element, greeter: Rc<dyn Fn()>) -> Result<Self, JsValue> {
        let template = Template::from_document(TEMPLATE_ID)?;

        Ok(Self {
            container,
            template,
            greeter,
            greet_binding: None,
        })
    }
}

impl View for HomeView {
    fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.container, self.template.markup());
        Ok(())
    }

    fn activate(&mut self) -> Result<(), JsValue> {
        if self.greet_binding.is_none() {
            let greeter = self.greeter.clone();
            let binding =
                EventBinding::delegated(&self.container, "click", "button", move |_event| {
                    greeter()
                })?;
            self.greet_binding = Some(binding);
        }
        Ok(())
    }

    fn deactivate(&mut self) {
        // Dropping the binding removes the listener from the container.
        self.greet_binding = None;
    }
}

/// Diagnostic greeting; touches no state.
fn greet() {
    web_sys::console::log_1(&JsValue::from_str("Hello World!"));
}
