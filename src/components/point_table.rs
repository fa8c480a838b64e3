//! Point Table Component
//!
//! Ranked department standings for the public dashboard.

use leptos::prelude::*;

use crate::components::EmptyState;
use crate::format::rank_badge_class;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PointTable() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.departments().read().is_empty()
            fallback=|| view! { <EmptyState icon="📊" message="No departments added yet" /> }
        >
            <div class="point-table">
                {move || store.departments().get().into_iter().enumerate().map(|(index, dept)| {
                    let badge_class = rank_badge_class(dept.rank);
                    view! {
                        <div class="rank-card" style=format!("animation-delay: {:.1}s", index as f64 * 0.1)>
                            <div class=format!("rank-badge {}", badge_class)>
                                {format!("#{}", dept.rank)}
                            </div>
                            <div class="rank-info">
                                <div class="dept-name">{dept.name.clone()}</div>
                                <div class="dept-rank">{format!("Rank {}", dept.rank)}</div>
                            </div>
                            <div class="points-display">
                                <div class="points-value">{dept.total_points}</div>
                                <div class="points-label">"Points"</div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
