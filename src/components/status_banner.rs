//! Status Banner Component
//!
//! Spinner while a fetch is in flight, error message with retry otherwise.

use leptos::prelude::*;

use crate::state::LoadState;
use crate::store::use_portfolio_store;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_portfolio_store();

    move || match store.load_state() {
        LoadState::Loading => view! {
            <div class="status-banner loading">
                <span class="spinner"></span>
                "Chargement des projets..."
            </div>
        }.into_any(),
        LoadState::Error(message) => view! {
            <div class="status-banner error" role="alert">
                <span class="status-message">{message}</span>
                <button class="btn retry-btn" on:click=move |_| store.refresh()>
                    "Réessayer"
                </button>
            </div>
        }.into_any(),
        LoadState::Idle | LoadState::Loaded => ().into_any(),
    }
}
