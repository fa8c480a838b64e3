//! SportsFest Frontend App
//!
//! Root component. The backend serves the same bundle on every page,
//! so the current path decides which tree to mount: the public
//! dashboard, the admin login page, or the admin panel.

use leptos::prelude::*;

use crate::admin::AdminApp;
use crate::components::LoginPage;
use crate::dashboard::DashboardApp;

#[component]
pub fn App() -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();

    match path.trim_end_matches('/') {
        "/admin" => view! { <LoginPage /> }.into_any(),
        "/admin/dashboard" => view! { <AdminApp /> }.into_any(),
        _ => view! { <DashboardApp /> }.into_any(),
    }
}
