//! Upstream REST service health probe.

use tracing::debug;

use portico_core::error::{GatewayError, GatewayResult};
use portico_core::paths;

/// Probes the REST service's health endpoint.
///
/// The probe is unauthenticated; a non-success status is reported as
/// [`GatewayError::UpstreamUnhealthy`] with the offending code.
#[derive(Clone)]
pub struct HealthChecker {
    http: reqwest::Client,
    rest_url: String,
}

impl HealthChecker {
    pub fn new(http: reqwest::Client, rest_url: impl Into<String>) -> Self {
        Self {
            http,
            rest_url: rest_url.into(),
        }
    }

    /// Check the REST service's `/healthz` endpoint.
    pub async fn check(&self) -> GatewayResult<()> {
        let url = format!("{}{}", self.rest_url, paths::HEALTHZ);
        debug!(url = %url, "probing rest service health");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::UpstreamUnhealthy(status.as_u16()))
        }
    }
}
