//! Alert and notification system
//!
//! Classifies incoming snapshots into user-visible alerts, suppresses
//! duplicates, keeps a bounded newest-first log, and dispatches
//! notifications to pluggable sinks.

mod log;
mod notifier;
mod policy;
mod types;

pub use self::log::{AlertLog, DEFAULT_CAPACITY};
pub use notifier::{NotificationManager, NotificationSink, TerminalNotifier};
pub use policy::{
    AlertDraft, AlertPolicy, PolicyKind, ThresholdPolicy, TransitionPolicy, DEFAULT_COOLDOWN,
};
pub use types::{AlertEntry, DedupState, Severity, SYSTEM_CATEGORY};
