// ============================================================================
// NOTES SPA - Browser entry point (pure Rust/WASM)
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod router;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::CONFIG;

// Single app instance for the lifetime of the page. Every event is handled
// on the browser's main thread, so a thread-local cell is enough.
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Module initialization: panic hook and logger only. The app itself is
/// started from the host page once the DOM is ready, see [`run_app`].
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        let level = if CONFIG.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}

/// Build the app, dispatch the route in the current URL fragment and start
/// listening for fragment changes. Called from the host page.
#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    log::info!("🚀 Notes app starting...");

    let mut app = App::new()?;
    app.dispatch_current()?;

    APP.with(|cell| *cell.borrow_mut() = Some(app));

    bind_hashchange()
}

/// Register the global `hashchange` listener.
///
/// Registered exactly once in [`run_app`], so `forget()` is safe here: the
/// closure has to stay alive for the whole page session anyway.
fn bind_hashchange() -> Result<(), JsValue> {
    let win = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        APP.with(|cell| match *cell.borrow_mut() {
            Some(ref mut app) => {
                if let Err(e) = app.dispatch_current() {
                    log::error!("Navigation failed: {:?}", e);
                }
            }
            None => log::warn!("hashchange before app initialization"),
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
