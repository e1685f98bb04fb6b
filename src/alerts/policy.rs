//! Alert classification policies
//!
//! A policy decides, for each fetched snapshot, whether a new alert should
//! be emitted and at what severity. Two policies are supported behind one
//! trait:
//!
//! - [`ThresholdPolicy`]: legacy behavior, fires only on critical
//!   snapshots, suppressed by a per-category cooldown window.
//! - [`TransitionPolicy`]: fires whenever the system message changes,
//!   with severity derived from the snapshot's alert level.
//!
//! Policies are pure functions of (snapshot, dedup state, now); the clock
//! is passed in explicitly so decisions are independently testable.

use super::types::{DedupState, Severity, SYSTEM_CATEGORY};
use crate::domain::{AlertLevel, SensorSnapshot};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Default cooldown window for the threshold policy
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60);

/// A decided-but-not-yet-committed alert
///
/// The session turns a draft into an [`AlertEntry`](super::AlertEntry)
/// when it commits the append, the dedup update, and the notification
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    /// Alert severity
    pub severity: Severity,
    /// Category that fired
    pub category: &'static str,
    /// Message copied verbatim from the snapshot
    pub message: String,
}

/// Classification policy
///
/// `evaluate` must not mutate anything: a `Some` return is a proposal,
/// and only the session commits it.
pub trait AlertPolicy: Send + Sync {
    /// Decide whether this snapshot should produce a new alert
    fn evaluate(
        &self,
        snapshot: &SensorSnapshot,
        dedup: &DedupState,
        now: SystemTime,
    ) -> Option<AlertDraft>;

    /// Policy name for logging and identification
    fn name(&self) -> &str;
}

/// Which policy to run, as selected in configuration or on the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Critical-only alerts with a cooldown window
    Threshold,
    /// Alert on every system message change
    #[default]
    Transition,
}

impl PolicyKind {
    /// Instantiate the selected policy
    pub fn build(self, cooldown: Duration) -> Box<dyn AlertPolicy> {
        match self {
            Self::Threshold => Box::new(ThresholdPolicy::new(cooldown)),
            Self::Transition => Box::new(TransitionPolicy),
        }
    }
}

/// Legacy threshold policy
///
/// Fires only when the snapshot's alert level is critical, and at most
/// once per cooldown window for the category, independent of message
/// content. Warning and normal snapshots never notify.
#[derive(Debug, Clone)]
pub struct ThresholdPolicy {
    cooldown: Duration,
}

impl ThresholdPolicy {
    /// Create a threshold policy with the given cooldown window
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl AlertPolicy for ThresholdPolicy {
    fn evaluate(
        &self,
        snapshot: &SensorSnapshot,
        dedup: &DedupState,
        now: SystemTime,
    ) -> Option<AlertDraft> {
        if snapshot.alert_level != AlertLevel::Critical {
            return None;
        }

        // An absent or empty message never emits, regardless of level
        let message = snapshot.message()?;

        // Within the cooldown window the category stays silent, no matter
        // what the message says
        if let Some(elapsed) = dedup.since_last_fired(SYSTEM_CATEGORY, now) {
            if elapsed < self.cooldown {
                return None;
            }
        }

        Some(AlertDraft {
            severity: Severity::Critical,
            category: SYSTEM_CATEGORY,
            message: message.to_string(),
        })
    }

    fn name(&self) -> &str {
        "threshold"
    }
}

/// Message-transition policy
///
/// Fires whenever the system message differs from the last emitted one
/// (case-sensitive comparison). There is no time window: a changed
/// message fires immediately, an unchanged message never fires again.
/// A transition back to a "normal" message is a transition like any
/// other and emits an info alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionPolicy;

impl AlertPolicy for TransitionPolicy {
    fn evaluate(
        &self,
        snapshot: &SensorSnapshot,
        dedup: &DedupState,
        _now: SystemTime,
    ) -> Option<AlertDraft> {
        let message = snapshot.message()?;

        if dedup.last_message() == Some(message) {
            return None;
        }

        Some(AlertDraft {
            severity: Severity::from(snapshot.alert_level),
            category: SYSTEM_CATEGORY,
            message: message.to_string(),
        })
    }

    fn name(&self) -> &str {
        "transition"
    }
}
