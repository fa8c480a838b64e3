//! Dashboard Tab Bar Component
//!
//! Tab buttons switching between the public dashboard sections.

use leptos::prelude::*;

/// Section key/label pairs in display order
pub const DASHBOARD_TABS: &[(&str, &str)] = &[
    ("standings", "🏆 Point Table"),
    ("schedule", "📅 Schedule"),
    ("results", "🏅 Results"),
    ("winners", "👑 Winners"),
    ("gallery", "📸 Gallery"),
];

#[component]
pub fn TabBar(
    active_tab: ReadSignal<String>,
    set_active_tab: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {DASHBOARD_TABS.iter().map(|(key, label)| {
                let tab_class = move || {
                    if active_tab.get() == *key { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_active_tab.set(key.to_string())>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
