//! Alert system domain types
//!
//! Defines alert entries, severity levels, and the deduplication state
//! shared across poll cycles.

use crate::domain::AlertLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, SystemTime};

/// Category key for alerts derived from the gateway's system status.
///
/// The gateway currently reports one monitored category; per-sensor
/// categories would get their own keys.
pub const SYSTEM_CATEGORY: &str = "system";

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, no action needed
    Info,
    /// Attention recommended
    Warning,
    /// Action required
    Critical,
}

impl Severity {
    /// Notification title for this severity tier
    ///
    /// Titles are fixed strings; the message carries the detail.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Status update",
            Self::Warning => "Attention needed",
            Self::Critical => "Immediate action required",
        }
    }

    /// How long a transient toast for this severity stays visible
    pub fn toast_duration(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(4),
            Self::Warning => Duration::from_secs(6),
            Self::Critical => Duration::from_secs(10),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl From<AlertLevel> for Severity {
    /// Severity of an emitted alert, derived from the snapshot's level.
    /// Anything that is not warning or critical (including an absent
    /// level) maps to info.
    fn from(level: AlertLevel) -> Self {
        match level {
            AlertLevel::Critical => Self::Critical,
            AlertLevel::Warning => Self::Warning,
            AlertLevel::Normal => Self::Info,
        }
    }
}

/// A logged, user-visible record of a detected condition change
///
/// Immutable once created; destroyed only by clearing the log or ending
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEntry {
    /// Monotonic id (creation time in ms, bumped on collision)
    pub id: u64,
    /// Alert severity
    pub severity: Severity,
    /// Category that fired (see [`SYSTEM_CATEGORY`])
    pub category: String,
    /// Message copied verbatim from the triggering snapshot
    pub message: String,
    /// Human-readable capture time
    pub timestamp: String,
}

impl fmt::Display for AlertEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.timestamp, self.severity, self.message)
    }
}

/// Suppression state shared across poll cycles
///
/// Invariant: updated if-and-only-if a new alert entry was actually
/// appended to the log. A failed fetch or a suppressed decision must
/// leave this untouched; [`Session`](crate::services::Session) enforces
/// that by being the only caller of [`DedupState::record`].
#[derive(Debug, Clone, Default)]
pub struct DedupState {
    /// Message of the last emitted alert
    last_message: Option<String>,
    /// When each category last fired
    last_fired: HashMap<String, SystemTime>,
}

impl DedupState {
    /// Fresh state: nothing emitted yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Message of the last emitted alert, if any
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Time elapsed since the given category last fired
    ///
    /// Returns `None` if the category never fired, or if `now` is earlier
    /// than the recorded fire time (clock skew).
    pub fn since_last_fired(&self, category: &str, now: SystemTime) -> Option<Duration> {
        self.last_fired
            .get(category)
            .and_then(|fired| now.duration_since(*fired).ok())
    }

    /// Record an emitted alert
    ///
    /// Must be called exactly when the matching entry is appended to the
    /// log, and never otherwise.
    pub fn record(&mut self, category: &str, message: &str, now: SystemTime) {
        self.last_message = Some(message.to_string());
        self.last_fired.insert(category.to_string(), now);
    }
}
