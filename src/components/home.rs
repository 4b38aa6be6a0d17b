//! Home Page Component
//!
//! Hero, projects, skills, timeline and contact sections.

use leptos::prelude::*;

use super::{Hero, ProjectList, SkillsGrid, StatusBanner, Timeline};
use crate::store::use_portfolio_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_portfolio_store();
    let projects = Signal::derive(move || store.projects());
    let no_projects = Signal::derive(move || store.has_no_projects());
    let timeline = Signal::derive(move || store.timeline_sorted());

    view! {
        <Hero />
        <StatusBanner />
        <ProjectList projects=projects empty=no_projects />
        <Show
            when=move || store.has_data()
            fallback=|| view! { <p class="empty-message">"Aucune donnée disponible."</p> }
        >
            <SkillsGrid />
            <Timeline events=timeline />
        </Show>
        <section id="contact" class="contact">
            <h2 class="section-title">"Contact"</h2>
            <p class="project-count">
                {move || format!("{} projets publics", store.project_count())}
            </p>
            <a class="btn btn-primary" href=format!("https://github.com/{}", store.config().github_owner)
                target="_blank" rel="noopener noreferrer">
                "GitHub"
            </a>
        </section>
    }
}
