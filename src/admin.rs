//! Admin Panel Page
//!
//! Password-gated CRUD panel. The session cookie is verified before
//! any panel functionality is wired up; a failed check navigates back
//! to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    DepartmentsSection, MediaSection, Notifications, Notifier, ResultsSection,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Admin section key/label pairs in sidebar order
const ADMIN_SECTIONS: &[(&str, &str)] = &[
    ("departments", "🏢 Departments"),
    ("results", "🏅 Results"),
    ("media", "📸 Media Gallery"),
];

#[component]
pub fn AdminApp() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Notifier::new());

    let (authed, set_authed) = signal(false);

    // Blocking session gate: nothing below runs until the cookie checks out
    spawn_local(async move {
        match api::check_session().await {
            Ok(()) => set_authed.set(true),
            Err(_) => {
                let _ = window().location().set_href("/admin");
            }
        }
    });

    // Load all three collections once authenticated and on every reload
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        if !authed.get() {
            return;
        }
        spawn_local(async move {
            match api::list_departments().await {
                Ok(loaded) => *store.departments().write() = loaded,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading departments: {}", e).into())
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
        });
    });

    let (active_section, set_active_section) = signal(String::from("departments"));

    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                web_sys::console::error_1(&format!("Logout error: {}", e).into());
                return;
            }
            let _ = window().location().set_href("/admin");
        });
    };

    view! {
        <Show
            when=move || authed.get()
            fallback=|| view! { <div class="auth-check">"Checking session..."</div> }
        >
            <div class="admin-layout">
                <aside class="admin-sidebar">
                    <h1>"SportsFest Admin"</h1>
                    <nav>
                        {ADMIN_SECTIONS.iter().map(|(key, label)| {
                            let link_class = move || {
                                if active_section.get() == *key {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            };
                            view! {
                                <a href="#" class=link_class on:click=move |ev| {
                                    ev.prevent_default();
                                    set_active_section.set(key.to_string());
                                }>
                                    {*label}
                                </a>
                            }
                        }).collect_view()}
                    </nav>
                    <button class="logout-btn" on:click=logout>"Logout"</button>
                </aside>

                <main class="admin-content">
                    <section class="section" class:active=move || active_section.get() == "departments">
                        <DepartmentsSection />
                    </section>
                    <section class="section" class:active=move || active_section.get() == "results">
                        <ResultsSection />
                    </section>
                    <section class="section" class:active=move || active_section.get() == "media">
                        <MediaSection />
                    </section>
                </main>
            </div>
            <Notifications />
        </Show>
    }
}
