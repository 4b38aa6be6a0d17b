//! Portfolio App
//!
//! Root component: provides the store and navigation context, loads the
//! projects on mount and switches pages on hash changes.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{HomePage, Navbar, ProjectDetailPage};
use crate::config::PortfolioConfig;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::PortfolioStore;

#[component]
pub fn App() -> impl IntoView {
    let config = PortfolioConfig::from_build_env();
    log::info!(target: "app", "starting portfolio for {}", config.github_owner);

    // Provide context to all children
    let store = PortfolioStore::new(config);
    provide_context(store);
    let ctx = AppContext::new(signal(Route::current()));
    provide_context(ctx);

    // Load projects on mount
    Effect::new(move |_| {
        if store.needs_load() {
            store.refresh();
        }
    });

    let owner_name = store.config().profile.name;

    let handle = window_event_listener(ev::hashchange, move |_| ctx.sync_from_location());
    on_cleanup(move || handle.remove());

    view! {
        <Navbar />
        <main class="app-layout">
            {move || match ctx.route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Project(id) => view! { <ProjectDetailPage id=id /> }.into_any(),
            }}
        </main>
        <footer class="app-footer">
            {format!("© {} {}", chrono::Utc::now().format("%Y"), owner_name)}
        </footer>
    }
}
