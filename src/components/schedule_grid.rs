//! Schedule Grid Component
//!
//! Upcoming event schedule cards for the public dashboard.

use leptos::prelude::*;

use crate::components::EmptyState;
use crate::format::event_type_label;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ScheduleGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.schedules().read().is_empty()
            fallback=|| view! { <EmptyState icon="📅" message="No schedules added yet" /> }
        >
            <div class="schedule-grid">
                <For
                    each=move || store.schedules().get()
                    key=|schedule| schedule.id
                    children=|schedule| {
                        let type_label = event_type_label(&schedule.event_type);
                        view! {
                            <div class="schedule-card">
                                <div class="event-name">
                                    {schedule.event_name.clone()}
                                    <span class="event-type">{type_label}</span>
                                </div>
                                <div class="schedule-details">
                                    <div class="detail-row">
                                        <span class="detail-icon">"📅"</span>
                                        <span>{schedule.date.clone()}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-icon">"⏰"</span>
                                        <span>{schedule.time.clone()}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="detail-icon">"📍"</span>
                                        <span>{schedule.venue.clone()}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
