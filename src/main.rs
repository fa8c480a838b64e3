//! SportsFest Frontend Entry Point

mod admin;
mod api;
mod app;
mod components;
mod context;
mod dashboard;
mod format;
mod grouping;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
