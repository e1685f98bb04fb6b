//! Domain models for twinmon
//!
//! Types describing what the gateway reports. Sensor fields are optional
//! because the gateway omits sensors that are offline; absence is never
//! conflated with a zero reading.

pub mod snapshot;

pub use snapshot::{AlertLevel, SensorSnapshot};
