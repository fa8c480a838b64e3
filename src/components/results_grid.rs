//! Results Grid Component
//!
//! Declared results grouped by event for the public dashboard.

use leptos::prelude::*;

use crate::components::EmptyState;
use crate::format::{event_type_label_emoji, position_class, position_label};
use crate::grouping::group_results;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ResultsGrid() -> impl IntoView {
    let store = use_app_store();
    let groups = Memo::new(move |_| group_results(&store.results().get()));

    view! {
        <Show
            when=move || !groups.get().is_empty()
            fallback=|| view! { <EmptyState icon="🏅" message="No results declared yet" /> }
        >
            <div class="results-grid">
                <For
                    each=move || groups.get()
                    key=|group| (group.event_name.clone(), group.event_type.clone())
                    children=|group| {
                        let type_label = event_type_label_emoji(&group.event_type);
                        let type_tag = (!type_label.is_empty()).then(|| {
                            view! { <span class="result-event-type">{type_label.clone()}</span> }
                        });
                        view! {
                            <div class="result-card">
                                <div class="result-event">
                                    {group.event_name.clone()}
                                    {type_tag}
                                </div>
                                <div class="result-positions">
                                    {group.entries.iter().map(|entry| {
                                        let label = position_label(entry.position);
                                        view! {
                                            <div class="position-row">
                                                <span class=format!("position-label {}", position_class(entry.position))>
                                                    {label}
                                                </span>
                                                <span>
                                                    {entry.department_name.clone()}
                                                    <span class="position-points">
                                                        {format!("(+{} pts)", entry.points_awarded)}
                                                    </span>
                                                </span>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
