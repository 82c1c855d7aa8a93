use async_trait::async_trait;
use gemcad_core::constants::AUTO_FILL_ENDPOINT;
use gemcad_core::PackingError;
use gemcad_settings::PackingSettings;
use reqwest::Client;
use std::time::Duration;

use super::{FillRequest, FillResponse, PackingService};
use crate::packing::PackingResult;

/// Client for the remote auto-fill endpoint.
#[derive(Debug, Clone)]
pub struct HttpPackingService {
    client: Client,
    url: String,
}

impl HttpPackingService {
    /// `endpoint` is the service base URL; the fill path is appended.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, PackingError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .timeout(timeout)
            .build()
            .map_err(PackingError::request_failed)?;
        Ok(Self {
            client,
            url: fill_url(endpoint),
        })
    }

    pub fn from_settings(settings: &PackingSettings) -> Result<Self, PackingError> {
        Self::new(
            &settings.endpoint,
            Duration::from_millis(settings.timeout_ms),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn fill_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), AUTO_FILL_ENDPOINT)
}

#[async_trait]
impl PackingService for HttpPackingService {
    async fn fill(&self, request: &FillRequest) -> Result<PackingResult, PackingError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Fill request to {} failed: {}", self.url, e);
                PackingError::request_failed(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Fill service at {} answered {}", self.url, status);
            return Err(PackingError::request_failed(format!("HTTP {}", status)));
        }

        let body: FillResponse = response
            .json()
            .await
            .map_err(|e| PackingError::InvalidResponse {
                reason: e.to_string(),
            })?;
        body.into_result(request)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
