//! Service layer for telemetry monitoring
//!
//! Services encapsulate the polling loop and the session state it
//! mutates: the alert log, the dedup slot, and the last-displayed
//! snapshot.

pub mod monitor;
pub mod session;

pub use monitor::{Monitor, MonitorConfig};
pub use session::{LinkStatus, Session};
