// ============================================================================
// ROUTER - Fragment routes and view dispatch
// ============================================================================

use std::collections::HashMap;
use std::fmt;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::views::{self, View};

/// The closed set of navigable routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Settings,
    About,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Settings, Route::About];

    /// Parse a URL fragment, with or without the leading `#`. The empty
    /// fragment is the home route; anything unrecognized is `None`.
    pub fn from_fragment(raw: &str) -> Option<Self> {
        match raw.trim_start_matches('#') {
            "" => Some(Route::Home),
            "settings" => Some(Route::Settings),
            "about" => Some(Route::About),
            _ => None,
        }
    }

    /// The fragment this route is reachable under.
    pub fn fragment(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Settings => "settings",
            Route::About => "about",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "Home"),
            Route::Settings => write!(f, "Settings"),
            Route::About => write!(f, "About"),
        }
    }
}

/// Dispatches routes to views: owns the view cache and the active view.
///
/// Views are created lazily on first navigation and cached for the session;
/// navigating to a route again reuses the cached instance. At most one view
/// is active at a time, and all views share the same container element.
pub struct Dispatcher {
    container: Element,
    views: HashMap<Route, Box<dyn View>>,
    active: Option<Route>,
}

impl Dispatcher {
    pub fn new(container: Element) -> Self {
        Self {
            container,
            views: HashMap::new(),
            active: None,
        }
    }

    /// The route whose view is currently rendered and event-bound, if any.
    pub fn active(&self) -> Option<Route> {
        self.active
    }

    /// Whether a view instance has been created for the route.
    pub fn is_cached(&self, route: Route) -> bool {
        self.views.contains_key(&route)
    }

    /// Switch the container over to the given route's view.
    ///
    /// The previous view's event bindings are detached before the target
    /// renders; its markup is simply overwritten, there is no unmount step.
    pub fn navigate(&mut self, route: Route) -> Result<(), JsValue> {
        if !self.views.contains_key(&route) {
            log::debug!("Creating {} view", route);
            let view = views::create(route, self.container.clone())?;
            self.views.insert(route, view);
        }

        if let Some(previous) = self.active.take() {
            if let Some(view) = self.views.get_mut(&previous) {
                view.deactivate();
            }
        }

        let view = self
            .views
            .get_mut(&route)
            .ok_or_else(|| JsValue::from_str("View cache miss"))?;
        view.render()?;
        view.activate()?;

        self.active = Some(route);
        log::debug!("{} view active", route);
        Ok(())
    }
}
