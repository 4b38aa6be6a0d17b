//! Project Detail Component
//!
//! Dedicated page for one project: summary from the store plus the optional
//! compiled-in write-up.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::data;
use crate::markdown::{parse_markdown, parse_markdown_inline};
use crate::models::{Project, ProjectDetail};
use crate::route::Route;
use crate::store::use_portfolio_store;

#[component]
fn WriteUp(detail: &'static ProjectDetail) -> impl IntoView {
    view! {
        <section class="project-writeup">
            <div class="markdown-body" inner_html=parse_markdown(detail.description)></div>

            {(!detail.stack.is_empty()).then(|| view! {
                <ul class="project-stack">
                    {detail.stack.iter().map(|tech| view! {
                        <li class="stack-item">
                            {tech.icon.map(|icon| view! { <img class="stack-icon" src=icon alt="" /> })}
                            <span>{tech.name}</span>
                        </li>
                    }).collect_view()}
                </ul>
            })}

            <div class="project-screenshots">
                {detail.screenshots.iter().map(|src| view! {
                    <img class="project-screenshot" src=*src alt="Capture d'écran" />
                }).collect_view()}
            </div>

            {detail.retrospective.map(|text| view! {
                <div class="project-retrospective">
                    <h3>"Bilan"</h3>
                    <p inner_html=parse_markdown_inline(text)></p>
                </div>
            })}
        </section>
    }
}

#[component]
fn ProjectSummary(project: Project) -> impl IntoView {
    let detail = data::project_detail(&project.title);

    view! {
        <article class="project-detail-card">
            <h1 class="project-detail-title">{project.title.clone()}</h1>
            <p class="project-detail-description">{project.description.clone()}</p>
            <ul class="project-tags">
                {project.tags.iter().map(|tag| view! { <li class="tag">{tag.clone()}</li> }).collect_view()}
            </ul>
            <div class="project-detail-meta">
                {project.stars.map(|stars| view! { <span class="project-stars">"★ " {stars}</span> })}
                {project.updated_at.map(|at| view! {
                    <span class="project-updated">"Mis à jour le " {at.format("%d/%m/%Y").to_string()}</span>
                })}
            </div>
            <a class="btn btn-primary" href=project.link.clone() target="_blank" rel="noopener noreferrer">
                "Voir sur GitHub"
            </a>
            {detail.map(|detail| view! { <WriteUp detail=detail /> })}
        </article>
    }
}

#[component]
pub fn ProjectDetailPage(id: u32) -> impl IntoView {
    let store = use_portfolio_store();
    let ctx = use_app_context();

    // Deep link: nothing loaded yet
    if store.needs_load() {
        store.refresh();
    }

    let project = Memo::new(move |_| store.project(id));

    view! {
        <div class="project-detail-page">
            <button class="btn back-btn" on:click=move |_| ctx.navigate(Route::Home)>
                "← Retour"
            </button>

            {move || match (project.get(), store.is_loading() || !store.has_loaded()) {
                (Some(project), _) => view! { <ProjectSummary project=project /> }.into_any(),
                (None, true) => view! {
                    <div class="status-banner loading">
                        <span class="spinner"></span>
                        "Chargement du projet..."
                    </div>
                }.into_any(),
                (None, false) => view! {
                    <div class="status-banner error">
                        <span class="status-message">
                            {store.error().unwrap_or_else(|| "Projet introuvable.".to_string())}
                        </span>
                        <button class="btn retry-btn" on:click=move |_| store.refresh()>"Réessayer"</button>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
