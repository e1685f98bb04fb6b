//! Command handlers
//!
//! One module per subcommand; each takes parsed arguments plus the loaded
//! configuration and returns the unified result type.

mod fetch;
mod watch;

pub use fetch::run_fetch;
pub use watch::run_watch;
