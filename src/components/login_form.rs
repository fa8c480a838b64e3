//! Admin Login Page
//!
//! Credential form posting to the session endpoint. Success navigates
//! to the admin panel; failure shows an inline error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LoginArgs};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(&LoginArgs { username: &user, password: &pass }).await {
                Ok(()) => {
                    let _ = window().location().set_href("/admin/dashboard");
                }
                Err(_) => {
                    set_error.set(Some("Invalid username or password".to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>"Admin Login"</h1>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! {
                    <p class="login-error">{message}</p>
                })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
