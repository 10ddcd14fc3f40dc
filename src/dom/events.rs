// ============================================================================
// EVENT HANDLING - Listener bindings that detach on drop
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

/// A live event listener on an element.
///
/// The closure stays alive as long as the binding does, and the listener is
/// removed from the element when the binding is dropped. A view that is
/// deactivated and later reactivated therefore cannot stack a second handler
/// on the shared container.
pub struct EventBinding {
    target: Element,
    event_type: String,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventBinding {
    /// Listen on `element` for `event_type`, invoking `handler` only when
    /// the event originated inside a descendant matching `selector`.
    pub fn delegated<F>(
        element: &Element,
        event_type: &str,
        selector: &'static str,
        mut handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let scope = element.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let hit = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(selector).ok().flatten());
            if let Some(hit) = hit {
                // The selector match must live inside the listening element.
                let node: &Node = hit.as_ref();
                if scope.contains(Some(node)) {
                    handler(event);
                }
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;

        Ok(Self {
            target: element.clone(),
            event_type: event_type.to_string(),
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
