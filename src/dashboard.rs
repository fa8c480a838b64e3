//! Public Dashboard Page
//!
//! Tabbed leaderboard view. Loads every collection on mount and again
//! every 30 seconds; each sub-load failure is logged and leaves that
//! section at its previous contents.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{Gallery, GalleryKind, PointTable, ResultsGrid, ScheduleGrid, TabBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Auto-refresh interval for all dashboard sections
const REFRESH_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn DashboardApp() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load all collections when the trigger changes
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_departments().await {
                Ok(loaded) => *store.departments().write() = loaded,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading point table: {}", e).into())
                }
            }
            match api::list_results().await {
                Ok(loaded) => *store.results().write() = loaded,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading results: {}", e).into())
                }
            }
            match api::list_media().await {
                Ok(loaded) => *store.media().write() = loaded,
                Err(e) => web_sys::console::error_1(&format!("Error loading media: {}", e).into()),
            }
            match api::list_schedules().await {
                Ok(loaded) => *store.schedules().write() = loaded,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading schedules: {}", e).into())
                }
            }
        });
    });

    // Auto-refresh every 30 seconds
    spawn_local(async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            set_reload_trigger.update(|v| *v += 1);
        }
    });

    let (active_tab, set_active_tab) = signal(String::from("standings"));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"SportsFest"</h1>
            </header>

            <TabBar active_tab=active_tab set_active_tab=set_active_tab />

            <div class="tab-content" class:active=move || active_tab.get() == "standings">
                <PointTable />
            </div>
            <div class="tab-content" class:active=move || active_tab.get() == "schedule">
                <ScheduleGrid />
            </div>
            <div class="tab-content" class:active=move || active_tab.get() == "results">
                <ResultsGrid />
            </div>
            <div class="tab-content" class:active=move || active_tab.get() == "winners">
                <Gallery kind=GalleryKind::Winners />
            </div>
            <div class="tab-content" class:active=move || active_tab.get() == "gallery">
                <Gallery kind=GalleryKind::Events />
            </div>
        </div>
    }
}
