//! Sensor snapshot model
//!
//! A snapshot is one point-in-time reading set as reported by the gateway's
//! `/api/sensors/latest` endpoint. It is transient: owned by the poll cycle
//! that fetched it, then handed to the session for display and alerting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway-reported alert level for the snapshot as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Everything within configured bounds
    #[default]
    Normal,
    /// Attention recommended
    Warning,
    /// Action required
    Critical,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One point-in-time sensor reading set
///
/// All sensor fields are optional: the gateway omits (rather than
/// null-fills) sensors that are offline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Ambient temperature in degrees Celsius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    /// Relative humidity in %RH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    /// PIR motion flag, reported as 0 or 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<u8>,

    /// Measured current in amperes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,

    /// Measured power draw in watts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,

    /// Number of people detected by the camera pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_count: Option<u32>,

    /// Operating mode tag (observed values: ACTIVE, HOLD, ECO; open-ended)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_mode: Option<String>,

    /// Human-readable rationale for the current mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,

    /// Gateway's own classification of the snapshot
    #[serde(default)]
    pub alert_level: AlertLevel,

    /// Set when the gateway is reachable but its own upstream failed.
    /// Wire name is `error` (the gateway's field name).
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub transport_error: Option<String>,
}

impl SensorSnapshot {
    /// Motion flag as a boolean, if the PIR sensor reported at all
    pub fn motion_detected(&self) -> Option<bool> {
        self.motion.map(|m| m != 0)
    }

    /// The system message, only if present and non-empty
    ///
    /// An empty message is treated the same as an absent one: "no alert".
    pub fn message(&self) -> Option<&str> {
        self.system_message.as_deref().filter(|m| !m.is_empty())
    }
}
