//! Schedule Endpoints

use gloo_net::http::Request;

use super::{check_status, API_BASE};
use crate::models::Schedule;

pub async fn list_schedules() -> Result<Vec<Schedule>, String> {
    let response = Request::get(&format!("{API_BASE}/schedules"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)?;
    response.json().await.map_err(|e| e.to_string())
}
