//! Timeline Component
//!
//! Career path, most recent first; the hovered entry is highlighted.

use leptos::prelude::*;

use crate::interaction::TimelineFocus;
use crate::models::TimelineEvent;

#[component]
pub fn Timeline(#[prop(into)] events: Signal<Vec<TimelineEvent>>) -> impl IntoView {
    let focus = RwSignal::new(TimelineFocus::default());

    view! {
        <section id="timeline" class="timeline">
            <h2 class="section-title">"Parcours"</h2>
            <ol class="timeline-list">
                {move || events.get().into_iter().enumerate().map(|(index, event)| {
                    let is_active = move || focus.with(|f| f.is(index));
                    view! {
                        <li
                            class="timeline-item"
                            class:active=is_active
                            on:mouseenter=move |_| focus.update(|f| f.set(Some(index)))
                            on:mouseleave=move |_| focus.update(|f| f.set(None))
                        >
                            <span class="timeline-period">{event.period}</span>
                            <div class="timeline-content">
                                <h3 class="timeline-title">{event.title}</h3>
                                <p class="timeline-institution">{event.institution}</p>
                                <p class="timeline-description">{event.description}</p>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </section>
    }
}
