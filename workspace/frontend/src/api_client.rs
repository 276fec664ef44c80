pub mod dashboard;

use gloo_net::http::Request;
use nogops::{DashboardError, Result};
use serde::Deserialize;
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler.
///
/// The response body is decoded directly as `T`.
pub async fn get<T>(endpoint: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = DashboardError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = DashboardError::Http { status: response.status() };
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let err = DashboardError::Decode(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
