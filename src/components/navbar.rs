//! Navbar Component
//!
//! Fixed top bar with section links, CV download and a mobile menu.

use leptos::ev;
use leptos::prelude::*;

use super::hero::scroll_to_section;
use crate::context::use_app_context;
use crate::route::{section_anchor, Route};
use crate::store::use_portfolio_store;

/// Section anchors shown in the navbar
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Accueil", "#hero"),
    ("Projets", "#projects"),
    ("Compétences", "#skills"),
    ("Parcours", "#timeline"),
    ("Contact", "#contact"),
];

/// Scroll offset (px) past which the bar gets its solid background
const SCROLLED_THRESHOLD: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_portfolio_store();
    let ctx = use_app_context();
    let cv_link = store.config().profile.cv_link;

    let (is_scrolled, set_is_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_is_scrolled.set(y > SCROLLED_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    // Off the home page the anchor target does not exist yet: go home, then
    // scroll once the sections are rendered.
    let follow_anchor = move |ev: ev::MouseEvent, href: &'static str| {
        set_menu_open.set(false);
        let Some(section) = section_anchor(href) else {
            return;
        };
        if ctx.route.get_untracked() != Route::Home {
            ev.prevent_default();
            ctx.navigate(Route::Home);
            request_animation_frame(move || scroll_to_section(section));
        }
    };

    view! {
        <nav class="navbar" class:scrolled=move || is_scrolled.get()>
            <a class="navbar-brand" href="#hero" on:click=move |ev| follow_anchor(ev, "#hero")>"AP"</a>

            <button
                class="navbar-toggle"
                aria-label="Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <ul class="navbar-links" class:open=move || menu_open.get()>
                {NAV_LINKS.iter().map(|&(label, href)| {
                    view! {
                        <li>
                            <a href=href on:click=move |ev| follow_anchor(ev, href)>{label}</a>
                        </li>
                    }
                }).collect_view()}
                <li>
                    <a class="navbar-cv" href=cv_link download="">"CV"</a>
                </li>
            </ul>
        </nav>
    }
}
