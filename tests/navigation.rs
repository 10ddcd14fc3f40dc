//! Browser tests for view caching, activation and fragment dispatch.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit};

use notes_spa::app::App;
use notes_spa::dom::{self, EventBinding, Template};
use notes_spa::router::{Dispatcher, Route};
use notes_spa::views::{HomeView, View};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div id="notes-app"></div>
<script type="text/template" id="homeview-tpl"><h1>Notes</h1><button>Say hello</button></script>
<script type="text/template" id="settingsview-tpl"><h1>Settings</h1></script>
<script type="text/template" id="aboutview-tpl"><h1>About</h1></script>
"#;

/// Reset the page body to the fixture and return the container element.
fn install_fixture() -> Element {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(FIXTURE);
    dom::get_element_by_id("notes-app").unwrap()
}

fn click_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn navigating_renders_each_route() {
    let container = install_fixture();
    let mut dispatcher = Dispatcher::new(container.clone());

    dispatcher.navigate(Route::Home).unwrap();
    assert_eq!(dispatcher.active(), Some(Route::Home));
    assert!(container.inner_html().contains("<h1>Notes</h1>"));

    dispatcher.navigate(Route::Settings).unwrap();
    assert_eq!(dispatcher.active(), Some(Route::Settings));
    assert!(container.inner_html().contains("<h1>Settings</h1>"));

    dispatcher.navigate(Route::About).unwrap();
    assert_eq!(dispatcher.active(), Some(Route::About));
    assert!(container.inner_html().contains("<h1>About</h1>"));

    // Earlier views stay cached; only the last one is active.
    assert!(dispatcher.is_cached(Route::Home));
    assert!(dispatcher.is_cached(Route::Settings));
}

#[wasm_bindgen_test]
fn render_is_idempotent() {
    let container = install_fixture();
    let mut dispatcher = Dispatcher::new(container.clone());

    dispatcher.navigate(Route::Home).unwrap();
    let first = container.inner_html();
    dispatcher.navigate(Route::Home).unwrap();
    assert_eq!(container.inner_html(), first);
}

#[wasm_bindgen_test]
fn same_route_reuses_cached_view() {
    let container = install_fixture();
    let mut dispatcher = Dispatcher::new(container.clone());

    dispatcher.navigate(Route::Home).unwrap();
    let first = container.inner_html();

    // Changing the template source after the first visit must not show up:
    // the cached instance captured its template when it was created.
    dom::get_element_by_id("homeview-tpl")
        .unwrap()
        .set_inner_html("<h1>Replaced</h1>");

    dispatcher.navigate(Route::Settings).unwrap();
    dispatcher.navigate(Route::Home).unwrap();
    assert_eq!(container.inner_html(), first);
}

#[wasm_bindgen_test]
fn delegated_binding_fires_and_fully_detaches() {
    let container = install_fixture();
    let button = dom::create_element("button").unwrap();
    dom::append_child(&container, &button).unwrap();

    let hits = Rc::new(Cell::new(0u32));
    let counter = hits.clone();
    let binding = EventBinding::delegated(&container, "click", "button", move |_event| {
        counter.set(counter.get() + 1);
    })
    .unwrap();

    button.dispatch_event(&click_event()).unwrap();
    assert_eq!(hits.get(), 1);

    // A click that misses the selector does not fire the handler.
    container.dispatch_event(&click_event()).unwrap();
    assert_eq!(hits.get(), 1);

    drop(binding);
    button.dispatch_event(&click_event()).unwrap();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn home_reactivation_does_not_stack_handlers() {
    let container = install_fixture();

    let greets = Rc::new(Cell::new(0u32));
    let counter = greets.clone();
    let mut home = HomeView::with_greeter(
        container.clone(),
        Rc::new(move || counter.set(counter.get() + 1)),
    )
    .unwrap();

    home.render().unwrap();
    home.activate().unwrap();
    let button = container.query_selector("button").unwrap().unwrap();
    button.dispatch_event(&click_event()).unwrap();
    assert_eq!(greets.get(), 1);

    // Deactivated: the handler no longer fires.
    home.deactivate();
    button.dispatch_event(&click_event()).unwrap();
    assert_eq!(greets.get(), 1);

    // Reactivated: exactly one handler is live again.
    home.render().unwrap();
    home.activate().unwrap();
    let button = container.query_selector("button").unwrap().unwrap();
    button.dispatch_event(&click_event()).unwrap();
    assert_eq!(greets.get(), 2);
}

#[wasm_bindgen_test]
fn full_navigation_cycle_keeps_one_view_active() {
    let container = install_fixture();
    let mut dispatcher = Dispatcher::new(container.clone());

    for route in [Route::Home, Route::Settings, Route::About, Route::Home] {
        dispatcher.navigate(route).unwrap();
        assert_eq!(dispatcher.active(), Some(route));
    }

    // The revisited home view is the cached one and its button is live.
    let button = container.query_selector("button").unwrap().unwrap();
    button.dispatch_event(&click_event()).unwrap();
}

#[wasm_bindgen_test]
fn fresh_load_defaults_to_home() {
    let container = install_fixture();
    let mut app = App::new().unwrap();

    app.handle_fragment("").unwrap();
    assert_eq!(app.dispatcher().active(), Some(Route::Home));

    // Clicking the greeting button does not fail.
    let button = container.query_selector("button").unwrap().unwrap();
    button.dispatch_event(&click_event()).unwrap();
}

#[wasm_bindgen_test]
fn unknown_fragment_keeps_current_view() {
    let _container = install_fixture();
    let mut app = App::new().unwrap();

    app.handle_fragment("#settings").unwrap();
    assert_eq!(app.dispatcher().active(), Some(Route::Settings));

    app.handle_fragment("#archive").unwrap();
    assert_eq!(app.dispatcher().active(), Some(Route::Settings));
}

#[wasm_bindgen_test]
fn missing_template_fails_view_initialization() {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(r#"<div id="notes-app"></div>"#);
    let container = dom::get_element_by_id("notes-app").unwrap();

    let mut dispatcher = Dispatcher::new(container);
    assert!(dispatcher.navigate(Route::Home).is_err());
    assert!(Template::from_document("missing-tpl").is_err());
}
