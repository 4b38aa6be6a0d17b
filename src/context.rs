//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Go to a page, keeping the address bar in sync
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_hash(&route.to_hash()) {
                log::warn!(target: "app", "failed to update location hash: {:?}", err);
            }
            let _ = window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.set_route.set(route);
    }

    /// Sync with the address bar after a `hashchange`
    pub fn sync_from_location(&self) {
        let route = Route::current();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
