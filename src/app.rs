// ============================================================================
// APP - Application bootstrap and fragment handling
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom;
use crate::router::{Dispatcher, Route};

/// The application: owns the dispatcher and translates URL fragments into
/// navigation on it.
pub struct App {
    dispatcher: Dispatcher,
}

impl App {
    /// Bind the app to the container element named in the configuration.
    /// Fails if the container is missing from the document.
    pub fn new() -> Result<Self, JsValue> {
        let container = dom::get_element_by_id(&CONFIG.container_id).ok_or_else(|| {
            JsValue::from_str(&format!("No #{} element found", CONFIG.container_id))
        })?;

        Ok(Self {
            dispatcher: Dispatcher::new(container),
        })
    }

    /// Dispatch the route encoded in the current `location.hash`.
    pub fn dispatch_current(&mut self) -> Result<(), JsValue> {
        let win = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let fragment = win.location().hash()?;
        self.handle_fragment(&fragment)
    }

    /// Dispatch a single fragment. Unknown fragments are ignored: there is
    /// no catch-all view, the current view stays in place.
    pub fn handle_fragment(&mut self, fragment: &str) -> Result<(), JsValue> {
        match Route::from_fragment(fragment) {
            Some(route) => self.dispatcher.navigate(route),
            None => {
                log::warn!("Unknown fragment '{}', keeping current view", fragment);
                Ok(())
            }
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
