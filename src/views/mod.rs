// ============================================================================
// VIEWS - One module per page, dispatched by the router
// ============================================================================

pub mod about;
pub mod home;
pub mod settings;

pub use about::AboutView;
pub use home::HomeView;
pub use settings::SettingsView;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::Route;

/// A page: renders its markup into the shared container and optionally binds
/// interaction handlers while it is the active view.
pub trait View {
    /// Write the view's markup into the container. Safe to call repeatedly.
    fn render(&mut self) -> Result<(), JsValue>;

    /// Attach interaction handlers. Default: the view has none.
    fn activate(&mut self) -> Result<(), JsValue> {
        Ok(())
    }

    /// Detach interaction handlers so a later activation cannot double-fire.
    fn deactivate(&mut self) {}
}

/// Build the view for a route, bound to the shared container. Fails if the
/// view's template is missing from the document.
pub(crate) fn create(route: Route, container: Element) -> Result<Box<dyn View>, JsValue> {
    Ok(match route {
        Route::Home => Box::new(HomeView::new(container)?),
        Route::Settings => Box::new(SettingsView::new(container)?),
        Route::About => Box::new(AboutView::new(container)?),
    })
}
