//! Session-scoped monitoring state
//!
//! One [`Session`] holds everything with cross-cycle memory: the alert
//! log, the dedup slot, the last successfully fetched snapshot, and the
//! gateway link status. It is constructed fresh and empty, owned by the
//! polling loop, and dropped at teardown; there is no ambient module
//! state.

use crate::alerts::{AlertDraft, AlertEntry, AlertLog, DedupState};
use crate::domain::SensorSnapshot;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Visible gateway link indicator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkStatus {
    /// No snapshot received yet
    #[default]
    Initializing,
    /// Gateway reachable and reporting normally
    Connected,
    /// Gateway reachable, but its own upstream failed
    UpstreamError(String),
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => write!(f, "waiting for data"),
            Self::Connected => write!(f, "system normal"),
            Self::UpstreamError(e) => write!(f, "upstream error: {}", e),
        }
    }
}

/// Mutable state for one monitoring session
pub struct Session {
    log: AlertLog,
    dedup: DedupState,
    last_snapshot: Option<SensorSnapshot>,
    link: LinkStatus,
    last_entry_id: u64,
}

impl Session {
    /// Create a fresh, empty session
    pub fn new(log_capacity: usize) -> Self {
        Self {
            log: AlertLog::with_capacity(log_capacity),
            dedup: DedupState::new(),
            last_snapshot: None,
            link: LinkStatus::Initializing,
            last_entry_id: 0,
        }
    }

    /// Record a successfully fetched snapshot as the current display state
    ///
    /// Updates the link indicator from the snapshot's upstream-error
    /// field. A failed fetch never reaches this method, so prior display
    /// state survives failed cycles untouched.
    pub fn observe(&mut self, snapshot: SensorSnapshot) {
        self.link = match &snapshot.transport_error {
            Some(err) => LinkStatus::UpstreamError(err.clone()),
            None => LinkStatus::Connected,
        };
        self.last_snapshot = Some(snapshot);
    }

    /// Commit an emit decision: append to the log and update dedup state
    ///
    /// The two updates happen together, here and nowhere else, which is
    /// what keeps the dedup slot consistent with the log: a suppressed
    /// decision never reaches this method.
    pub fn commit(&mut self, draft: AlertDraft, now: SystemTime) -> AlertEntry {
        let entry = AlertEntry {
            id: self.next_entry_id(now),
            severity: draft.severity,
            category: draft.category.to_string(),
            message: draft.message,
            timestamp: format_capture_time(now),
        };

        self.dedup.record(&entry.category, &entry.message, now);
        self.log.append(entry.clone());
        entry
    }

    /// Next alert id: creation time in ms, strictly increasing even when
    /// two alerts land in the same millisecond
    fn next_entry_id(&mut self, now: SystemTime) -> u64 {
        let millis = now
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.last_entry_id = millis.max(self.last_entry_id + 1);
        self.last_entry_id
    }

    /// User-triggered clear of the alert log
    ///
    /// Dedup state is untouched: cleared alerts do not re-arm.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// The alert log, newest first
    pub fn log(&self) -> &AlertLog {
        &self.log
    }

    /// Current suppression state
    pub fn dedup(&self) -> &DedupState {
        &self.dedup
    }

    /// Last successfully fetched snapshot, if any
    pub fn last_snapshot(&self) -> Option<&SensorSnapshot> {
        self.last_snapshot.as_ref()
    }

    /// Current link indicator
    pub fn link(&self) -> &LinkStatus {
        &self.link
    }
}

fn format_capture_time(now: SystemTime) -> String {
    chrono::DateTime::<chrono::Local>::from(now)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
