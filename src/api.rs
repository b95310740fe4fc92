//! Backend API Client
//!
//! REST bindings to the storefront backend.

use gloo_net::http::Request;

use crate::models::ItemRecord;

/// Backend origin. Baked in via `API_URL` at build time; otherwise requests
/// go through the `/api` reverse-proxy prefix (see Trunk.toml).
pub fn api_base() -> &'static str {
    option_env!("API_URL").unwrap_or("/api")
}

/// Fetch one item record. Cookies ride along on every request.
///
/// Any non-2xx status or undecodable body is an `Err`; callers log it and
/// leave the view in its loading state.
pub async fn get_item(id: &str) -> Result<ItemRecord, String> {
    let url = format!("{}/get-item/{}", api_base(), id);
    let response = Request::get(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("GET {} returned {}", url, response.status()));
    }

    response
        .json::<ItemRecord>()
        .await
        .map_err(|e| e.to_string())
}
