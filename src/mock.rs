//! Mock implementations for testing
//!
//! Provides a scripted snapshot source and a recording notification sink
//! for unit testing the monitoring engine without a real gateway.

use crate::alerts::{NotificationSink, Severity};
use crate::domain::{AlertLevel, SensorSnapshot};
use crate::error::{Result, TransportError};
use crate::gateway::SnapshotSource;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Build a snapshot carrying just a system message and alert level
pub fn snapshot(message: &str, level: AlertLevel) -> SensorSnapshot {
    SensorSnapshot {
        system_message: Some(message.to_string()),
        alert_level: level,
        ..Default::default()
    }
}

/// Scripted snapshot source
///
/// Each fetch pops the next queued outcome. An exhausted script reports a
/// 503 so a test that over-fetches fails loudly instead of hanging.
pub struct MockGateway {
    script: Mutex<VecDeque<std::result::Result<SensorSnapshot, TransportError>>>,
}

impl MockGateway {
    /// Create a source with an empty script
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a successful fetch
    pub fn push_snapshot(&self, snapshot: SensorSnapshot) {
        self.script.lock().unwrap().push_back(Ok(snapshot));
    }

    /// Queue a failed fetch
    pub fn push_error(&self, error: TransportError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of scripted outcomes not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for MockGateway {
    fn fetch_latest(&self) -> std::result::Result<SensorSnapshot, TransportError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Status(503)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// One captured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub duration: Duration,
}

/// Notification sink that records everything it is asked to show
///
/// Clones share the same recording, so a test can hand one clone to the
/// manager and keep another for assertions.
#[derive(Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<RecordedNotification>>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything recorded so far, oldest first
    pub fn events(&self) -> Vec<RecordedNotification> {
        self.events.lock().unwrap().clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<()> {
        self.events.lock().unwrap().push(RecordedNotification {
            severity,
            title: title.to_string(),
            message: message.to_string(),
            duration,
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gateway_scripted_order() {
        let source = MockGateway::new();
        source.push_snapshot(snapshot("first", AlertLevel::Normal));
        source.push_error(TransportError::Status(500));

        assert_eq!(source.remaining(), 2);
        assert_eq!(
            source.fetch_latest().unwrap().message(),
            Some("first")
        );
        assert!(source.fetch_latest().is_err());
        // Exhausted script keeps failing
        assert!(source.fetch_latest().is_err());
    }

    #[test]
    fn test_recording_sink_shares_state_across_clones() {
        let recorder = RecordingSink::new();
        let clone = recorder.clone();

        clone
            .notify(Severity::Info, "Status update", "msg", Duration::from_secs(4))
            .unwrap();

        assert_eq!(recorder.events().len(), 1);
        assert_eq!(recorder.events()[0].message, "msg");
    }
}
