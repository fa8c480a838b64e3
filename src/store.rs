//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every
//! reload cycle replaces collections wholesale; rows are never patched
//! in place.

use reactive_stores::Store;

use crate::models::{Department, EventResult, MediaItem, Schedule};

/// Collections fetched from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ranked department standings
    pub departments: Vec<Department>,
    /// All declared results
    pub results: Vec<EventResult>,
    /// All gallery images (winner and event)
    pub media: Vec<MediaItem>,
    /// Event schedule entries
    pub schedules: Vec<Schedule>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    leptos::prelude::expect_context::<AppStore>()
}
