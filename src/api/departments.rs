//! Department Endpoints
//!
//! Bindings for the department collection and its admin mutations.

use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::{check_status, API_BASE};
use crate::models::Department;

/// Payload for the add-department form
#[derive(Serialize)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
}

pub async fn list_departments() -> Result<Vec<Department>, String> {
    let response = Request::get(&format!("{API_BASE}/departments"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)?;
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_department(args: &NewDepartment<'_>) -> Result<(), String> {
    let response = Request::post(&format!("{API_BASE}/departments"))
        .credentials(RequestCredentials::Include)
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}

pub async fn delete_department(id: u32) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/departments/{id}"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}
