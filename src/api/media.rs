//! Media Endpoints
//!
//! Bindings for gallery images. Upload is multipart so the image file
//! travels alongside its form fields.

use gloo_net::http::Request;
use web_sys::{FormData, RequestCredentials};

use super::{check_status, API_BASE};
use crate::models::MediaItem;

pub async fn list_media() -> Result<Vec<MediaItem>, String> {
    let response = Request::get(&format!("{API_BASE}/media"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)?;
    response.json().await.map_err(|e| e.to_string())
}

/// Upload a new image. `form` carries `media_type`, `event_name`,
/// `caption` and the `image` file itself.
pub async fn upload_media(form: FormData) -> Result<(), String> {
    let response = Request::post(&format!("{API_BASE}/media"))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}

pub async fn delete_media(id: u32) -> Result<(), String> {
    let response = Request::delete(&format!("{API_BASE}/media/{id}"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&response)
}
