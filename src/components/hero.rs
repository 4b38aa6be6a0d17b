//! Hero Component
//!
//! Landing banner with name, role and call-to-action buttons.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::store::use_portfolio_store;

/// Smooth-scroll to the element with the given id
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        log::debug!(target: "hero", "no section #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = use_portfolio_store().config().profile;

    view! {
        <section id="hero" class="hero">
            <h1 class="hero-name">{profile.name}</h1>
            <h2 class="hero-title">{profile.title}</h2>
            <p class="hero-description">{profile.description}</p>
            <div class="hero-actions">
                <button class="btn btn-primary" on:click=move |_| scroll_to_section("projects")>
                    "Voir mes projets"
                </button>
                <button class="btn btn-secondary" on:click=move |_| scroll_to_section("contact")>
                    "Me contacter"
                </button>
            </div>
        </section>
    }
}
