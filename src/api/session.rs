//! Admin Session Endpoints
//!
//! Cookie-based session check, login and logout. These live outside
//! `/api` on the backend.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::check_status;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Validate the admin session cookie. `Ok` iff the backend accepts it.
pub async fn check_session() -> Result<(), String> {
    let response = Request::get("/admin/check")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}

pub async fn login(args: &LoginArgs<'_>) -> Result<(), String> {
    let response = Request::post("/admin/login")
        .credentials(RequestCredentials::Include)
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}

pub async fn logout() -> Result<(), String> {
    let response = Request::post("/admin/logout")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}
