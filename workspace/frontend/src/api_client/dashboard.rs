use async_trait::async_trait;
use common::DashboardPayload;
use nogops::{DashboardSource, Result};
use crate::api_client;
use crate::settings;

pub async fn get_dashboard(endpoint: &str) -> Result<DashboardPayload> {
    log::trace!("Fetching dashboard data from {}", endpoint);
    let result = api_client::get::<DashboardPayload>(endpoint).await;

    match &result {
        Ok(payload) if payload.is_empty() => log::warn!("Dashboard endpoint returned an empty payload"),
        Ok(_) => log::info!("Successfully fetched dashboard data"),
        Err(e) => log::error!("Failed to fetch dashboard data: {}", e),
    }

    result
}

/// Dashboard data served over HTTP by the configured backend.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpDashboardSource {
    endpoint: String,
}

impl HttpDashboardSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings().dashboard_endpoint)
    }
}

#[async_trait(?Send)]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_dashboard(&self) -> Result<DashboardPayload> {
        get_dashboard(&self.endpoint).await
    }
}
