//! Skills Grid Component
//!
//! Category filter buttons above the skills grouped by category.

use leptos::prelude::*;

use crate::interaction::{categories, SkillFilter};
use crate::models::{Skill, MAX_SKILL_LEVEL};
use crate::store::use_portfolio_store;

#[component]
fn SkillChip(skill: Skill) -> impl IntoView {
    let width = format!("width: {}%;", u32::from(skill.level) * 100 / u32::from(MAX_SKILL_LEVEL));

    view! {
        <div class="skill-chip" title=format!("{}/{}", skill.level, MAX_SKILL_LEVEL)>
            {skill.icon.clone().map(|icon| view! { <img class="skill-icon" src=icon alt="" /> })}
            <span class="skill-name">{skill.name.clone()}</span>
            <div class="skill-level">
                <div class="skill-level-fill" style=width></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsGrid() -> impl IntoView {
    let store = use_portfolio_store();
    let filter = RwSignal::new(SkillFilter::default());

    let category_buttons = Memo::new(move |_| categories(&store.skills()));
    let grouped = Memo::new(move |_| {
        let groups = store.skills_by_category();
        filter.with(|f| {
            groups
                .into_iter()
                .map(|(category, members)| (category, f.apply(&members)))
                .filter(|(_, members)| !members.is_empty())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Compétences"</h2>

            <div class="skill-filters">
                <For
                    each=move || category_buttons.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let selected = category.clone();
                        let label = category.clone();
                        let is_active = move || filter.with(|f| f.is_selected(&category));
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| filter.update(|f| f.select(&selected))
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            <div class="skill-groups">
                <For
                    each=move || grouped.get()
                    key=|(category, members)| (category.clone(), members.iter().map(|s| s.name.clone()).collect::<Vec<_>>())
                    children=move |(category, members)| view! {
                        <div class="skill-group">
                            <h3 class="skill-group-title">{category}</h3>
                            <div class="skill-group-members">
                                {members.into_iter().map(|skill| view! { <SkillChip skill=skill /> }).collect_view()}
                            </div>
                        </div>
                    }
                />
            </div>
        </section>
    }
}
