//! Configuration system
//!
//! TOML-backed settings for the gateway connection, the polling cadence,
//! and the alerting engine. Every field has a default so a minimal file
//! (or no file at all) still yields a runnable configuration.

pub mod file;

pub use file::ConfigFile;

use crate::alerts::{PolicyKind, DEFAULT_CAPACITY};
use crate::error::ConfigError;
use crate::gateway::GatewayConfig;
use crate::services::MonitorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Gateway connection settings
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Polling cadence
    #[serde(default)]
    pub poll: PollConfig,

    /// Alerting engine settings
    #[serde(default)]
    pub alerts: AlertsConfig,
}

impl Config {
    /// Check cross-field constraints that serde defaults cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "poll.interval_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "gateway.timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Derive a monitor configuration
    pub fn monitor_config(&self, single_use: bool) -> MonitorConfig {
        MonitorConfig {
            interval: Duration::from_secs(self.poll.interval_secs),
            single_use,
            policy: self.alerts.policy,
            cooldown: Duration::from_secs(self.alerts.cooldown_secs),
            log_capacity: self.alerts.log_capacity,
            alerts_enabled: self.alerts.enabled,
        }
    }
}

fn default_interval_secs() -> u64 {
    2
}

/// Polling cadence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Seconds between poll ticks (reference range 1-5)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cooldown_secs() -> u64 {
    60
}

fn default_log_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Alerting engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Whether alert classification runs at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Classification policy: `threshold` or `transition`
    #[serde(default)]
    pub policy: PolicyKind,

    /// Cooldown window in seconds (threshold policy only)
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,

    /// Alert log capacity (drop oldest beyond this)
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            policy: PolicyKind::default(),
            cooldown_secs: default_cooldown_secs(),
            log_capacity: default_log_capacity(),
        }
    }
}
