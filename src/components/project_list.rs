//! Project List Component
//!
//! Grid of project cards with hover highlight.

use chrono::Utc;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::interaction::ProjectHover;
use crate::models::{Freshness, Project};
use crate::route::Route;

#[component]
fn ProjectCard(project: Project, hover: RwSignal<ProjectHover>) -> impl IntoView {
    let ctx = use_app_context();
    let id = project.id;
    let freshness = project.freshness(Utc::now());
    let is_hovered = move || hover.with(|h| h.is(id));

    view! {
        <article
            class="project-card"
            class:hovered=is_hovered
            on:mouseenter=move |_| hover.update(|h| h.set(Some(id)))
            on:mouseleave=move |_| hover.update(|h| h.set(None))
        >
            <header class="project-card-header">
                <h3
                    class="project-title"
                    on:click=move |_| ctx.navigate(Route::Project(id))
                >
                    {project.title.clone()}
                </h3>
                {project.stars.map(|stars| view! { <span class="project-stars">"★ " {stars}</span> })}
            </header>

            <p class="project-description">{project.description.clone()}</p>

            <ul class="project-tags">
                {project.tags.iter().map(|tag| view! { <li class="tag">{tag.clone()}</li> }).collect_view()}
            </ul>

            <footer class="project-card-footer">
                {(freshness != Freshness::Unknown).then(|| view! {
                    <span class="project-freshness">{freshness.label()}</span>
                })}
                <a class="project-link" href=project.link.clone() target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
            </footer>
        </article>
    }
}

#[component]
pub fn ProjectList(
    #[prop(into)] projects: Signal<Vec<Project>>,
    /// A completed fetch returned zero projects
    #[prop(into)]
    empty: Signal<bool>,
) -> impl IntoView {
    let hover = RwSignal::new(ProjectHover::default());

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projets"</h2>
            <div class="project-grid">
                <For
                    each=move || projects.get()
                    key=|project| (project.id, project.title.clone())
                    children=move |project| view! { <ProjectCard project=project hover=hover /> }
                />
            </div>
            {move || empty.get().then(|| view! {
                <p class="empty-message">"Aucun projet à afficher pour le moment."</p>
            })}
        </section>
    }
}
