//! Result Endpoints
//!
//! Bindings for declared results and their admin mutations. Adding or
//! deleting a result makes the backend recompute department points and
//! ranks, so callers reload everything afterwards.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::{check_status, API_BASE};
use crate::models::EventResult;

/// Payload for the add-result form
#[derive(Serialize)]
pub struct NewResult<'a> {
    pub event_name: &'a str,
    pub event_type: &'a str,
    pub department_id: u32,
    pub position: u32,
    pub points_awarded: i64,
}

pub async fn list_results() -> Result<Vec<EventResult>, String> {
    let response = Request::get(&format!("{API_BASE}/results"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)?;
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_result(args: &NewResult<'_>) -> Result<(), String> {
    let response = Request::post(&format!("{API_BASE}/results"))
        .credentials(RequestCredentials::Include)
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}

pub async fn delete_result(id: u32) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/results/{id}"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}
