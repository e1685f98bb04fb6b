//! Trait definitions for snapshot sources
//!
//! Abstracts over the gateway HTTP client to enable testing with mocks.

use crate::domain::SensorSnapshot;
use crate::error::TransportError;

/// A source of point-in-time sensor snapshots
///
/// One call corresponds to one poll cycle. Implementations must not
/// retry internally: the polling loop's next tick is the retry.
pub trait SnapshotSource {
    /// Fetch the latest snapshot from the source
    fn fetch_latest(&self) -> Result<SensorSnapshot, TransportError>;

    /// Source name for logging
    fn name(&self) -> &str;
}
