//! Gateway abstraction layer
//!
//! Wraps the HTTP gateway behind a [`SnapshotSource`] trait so the
//! monitoring engine can be tested against a scripted mock source.

mod client;
mod traits;

pub use client::{GatewayClient, GatewayConfig};
pub use traits::SnapshotSource;
