//! Polling loop monitor
//!
//! Orchestrates the poll cycle: fetch one snapshot, classify it, commit
//! any emit decision to the session, and dispatch notifications. The loop
//! is synchronous and single-threaded; a tick's fetch is bounded by the
//! client timeout and completes before the next tick is scheduled, so
//! fetches never overlap and the classifier always sees the most recently
//! resolved snapshot.

use crate::alerts::{AlertPolicy, NotificationManager, PolicyKind, DEFAULT_COOLDOWN};
use crate::domain::SensorSnapshot;
use crate::error::TransportError;
use crate::gateway::SnapshotSource;
use crate::services::Session;

use std::time::{Duration, SystemTime};

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between poll ticks
    pub interval: Duration,
    /// Whether to exit after one tick
    pub single_use: bool,
    /// Which classification policy to run
    pub policy: PolicyKind,
    /// Cooldown window for the threshold policy
    pub cooldown: Duration,
    /// Alert log capacity (0 = default)
    pub log_capacity: usize,
    /// Whether alert classification is enabled at all
    pub alerts_enabled: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            single_use: false,
            policy: PolicyKind::default(),
            cooldown: DEFAULT_COOLDOWN,
            log_capacity: 0,
            alerts_enabled: true,
        }
    }
}

/// Polling loop monitor
pub struct Monitor {
    config: MonitorConfig,
    policy: Box<dyn AlertPolicy>,
}

impl Monitor {
    /// Create a new monitor with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        let policy = config.policy.build(config.cooldown);
        Self { config, policy }
    }

    /// Create a fresh session sized for this monitor's configuration
    pub fn session(&self) -> Session {
        Session::new(self.config.log_capacity)
    }

    /// Execute a single poll tick
    ///
    /// On a transport failure the session is left untouched and the error
    /// is returned for logging; the caller schedules the next tick
    /// regardless.
    pub fn tick<S: SnapshotSource>(
        &self,
        source: &S,
        session: &mut Session,
        sinks: &NotificationManager,
    ) -> Result<(), TransportError> {
        let snapshot = source.fetch_latest()?;
        self.process(snapshot, session, sinks, SystemTime::now());
        Ok(())
    }

    /// Classify a fetched snapshot and commit the outcome
    ///
    /// Split from [`tick`](Self::tick) with an explicit clock so tests
    /// can drive cooldown windows deterministically.
    pub fn process(
        &self,
        snapshot: SensorSnapshot,
        session: &mut Session,
        sinks: &NotificationManager,
        now: SystemTime,
    ) {
        if let Some(err) = &snapshot.transport_error {
            log::warn!("Gateway reports upstream error: {}", err);
        }

        if self.config.alerts_enabled {
            if let Some(draft) = self.policy.evaluate(&snapshot, session.dedup(), now) {
                let entry = session.commit(draft, now);
                log::info!("Alert emitted ({}): {}", self.policy.name(), entry);
                sinks.dispatch(entry.severity, &entry.message);
            }
        }

        session.observe(snapshot);
    }

    /// Run the polling loop
    ///
    /// Resilient indefinitely: a failed cycle is logged and skipped, and
    /// the next scheduled tick acts as the retry. Returns only in
    /// single-use mode.
    pub fn run<S: SnapshotSource>(
        &self,
        source: &S,
        session: &mut Session,
        sinks: &NotificationManager,
    ) {
        loop {
            match self.tick(source, session, sinks) {
                Ok(()) => {
                    log::debug!("Poll tick ok, link: {}", session.link());
                }
                Err(e) => {
                    log::warn!("Snapshot fetch failed: {} (next tick will retry)", e);
                }
            }

            if self.config.single_use {
                log::info!("Single-use mode: exiting after one tick");
                break;
            }

            std::thread::sleep(self.config.interval);
        }
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
