//! Empty State Component
//!
//! Placeholder (icon + message) rendered instead of an empty list.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <p class="empty-state-text">{message}</p>
        </div>
    }
}
