//! twinmon - polling telemetry monitor library
//!
//! This library provides the core functionality for watching an IoT
//! gateway's sensor endpoint: periodic snapshot fetching, rule-based
//! alert classification with deduplication, a bounded in-memory alert
//! log, and pluggable notification sinks.
//!
//! # Modules
//!
//! - [`alerts`]: Classification policies, dedup state, alert log, sinks
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Snapshot models
//! - [`error`]: Error types
//! - [`gateway`]: HTTP gateway abstraction layer
//! - [`services`]: Polling loop and session state

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
