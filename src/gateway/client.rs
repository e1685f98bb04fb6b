//! HTTP gateway client
//!
//! Fetches sensor snapshots from the gateway's REST endpoint. The client
//! is blocking with a bounded request timeout, so one poll cycle can
//! never outlive the polling interval by much and fetches never overlap.

use super::traits::SnapshotSource;
use crate::domain::SensorSnapshot;
use crate::error::TransportError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header that tells an ngrok-style tunnel to skip its browser
/// interstitial and serve the API response directly.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

fn default_snapshot_path() -> String {
    "/api/sensors/latest".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

/// Gateway connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayConfig {
    /// Base URL of the gateway, e.g. `http://192.168.45.95:5000`
    pub base_url: String,

    /// Path of the latest-snapshot endpoint
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Send the tunnel-bypass header (needed when the gateway is exposed
    /// through an ngrok-style tunnel)
    #[serde(default)]
    pub skip_browser_warning: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            snapshot_path: default_snapshot_path(),
            timeout_secs: default_timeout_secs(),
            skip_browser_warning: false,
        }
    }
}

impl GatewayConfig {
    /// Full URL of the snapshot endpoint
    pub fn snapshot_url(&self) -> String {
        join_url(&self.base_url, &self.snapshot_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Blocking HTTP client for the gateway
pub struct GatewayClient {
    config: GatewayConfig,
    client: reqwest::blocking::Client,
}

impl GatewayClient {
    /// Create a client from gateway settings
    pub fn new(config: GatewayConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// The configured snapshot endpoint URL
    pub fn snapshot_url(&self) -> String {
        self.config.snapshot_url()
    }
}

impl SnapshotSource for GatewayClient {
    fn fetch_latest(&self) -> Result<SensorSnapshot, TransportError> {
        let mut request = self.client.get(self.snapshot_url());
        if self.config.skip_browser_warning {
            request = request.header(TUNNEL_BYPASS_HEADER, "true");
        }

        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        // Parse via serde_json so a non-snapshot body is reported as a
        // malformed payload rather than a generic request error
        let body = response.text()?;
        let snapshot = serde_json::from_str(&body)?;
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "gateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_url_joins_cleanly() {
        let config = GatewayConfig {
            base_url: "http://gateway.local:5000/".to_string(),
            snapshot_path: "/api/sensors/latest".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.snapshot_url(),
            "http://gateway.local:5000/api/sensors/latest"
        );
    }

    #[test]
    fn test_snapshot_url_without_slashes() {
        let config = GatewayConfig {
            base_url: "http://gateway.local:5000".to_string(),
            snapshot_path: "api/sensors/latest".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.snapshot_url(),
            "http://gateway.local:5000/api/sensors/latest"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.snapshot_path, "/api/sensors/latest");
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.skip_browser_warning);
    }

    #[test]
    fn test_config_from_toml_with_defaults() {
        let config: GatewayConfig =
            toml::from_str(r#"base_url = "http://10.0.0.7:5000""#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.7:5000");
        assert_eq!(config.snapshot_path, "/api/sensors/latest");
        assert!(!config.skip_browser_warning);
    }
}
