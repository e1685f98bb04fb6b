//! Alert notification sinks
//!
//! The core decides *whether* to notify and with what payload; rendering
//! belongs to the sink. A terminal sink is built in, and the
//! [`NotificationManager`] fans a notification out to every registered
//! sink.

use super::types::Severity;
use crate::error::Result;
use std::io::{self, Write};
use std::time::Duration;

/// Notification channel trait
///
/// `duration` is how long a transient rendering (a toast) should stay
/// visible; persistent sinks are free to ignore it.
pub trait NotificationSink: Send + Sync {
    /// Surface one alert to the user
    fn notify(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<()>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Terminal/console sink
///
/// Writes alerts to stderr with severity-colored formatting.
pub struct TerminalNotifier {
    /// Use stderr instead of stdout
    use_stderr: bool,
    /// Use colors (ANSI escape codes)
    use_colors: bool,
}

impl TerminalNotifier {
    /// Create a new terminal sink writing to stderr
    pub fn new() -> Self {
        Self {
            use_stderr: true,
            use_colors: Self::supports_color(),
        }
    }

    /// Create a sink that uses stdout
    pub fn stdout() -> Self {
        Self {
            use_stderr: false,
            use_colors: Self::supports_color(),
        }
    }

    /// Create a sink without colors
    pub fn no_color() -> Self {
        Self {
            use_stderr: true,
            use_colors: false,
        }
    }

    /// Check if the terminal supports colors
    fn supports_color() -> bool {
        std::env::var("TERM")
            .map(|term| term != "dumb")
            .unwrap_or(false)
    }

    fn format_line(&self, severity: Severity, title: &str, message: &str) -> String {
        format!("{} {}: {}", self.format_severity(severity), title, message)
    }

    /// Format severity with colors
    fn format_severity(&self, severity: Severity) -> String {
        if !self.use_colors {
            return format!("[{}]", severity);
        }

        let color_code = match severity {
            Severity::Info => "\x1b[36m",     // Cyan
            Severity::Warning => "\x1b[33m",  // Yellow
            Severity::Critical => "\x1b[31m", // Red
        };

        format!("{}[{}]\x1b[0m", color_code, severity)
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for TerminalNotifier {
    fn notify(
        &self,
        severity: Severity,
        title: &str,
        message: &str,
        _duration: Duration,
    ) -> Result<()> {
        let line = self.format_line(severity, title, message);

        if self.use_stderr {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{}", line)?;
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", line)?;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

/// Notification manager
///
/// Dispatches one alert to every registered sink. A failing sink is
/// logged and skipped; it never blocks the others or the polling loop.
pub struct NotificationManager {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl NotificationManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Send one notification to all sinks
    ///
    /// Title and toast duration are derived from the severity tier.
    pub fn dispatch(&self, severity: Severity, message: &str) {
        let title = severity.title();
        let duration = severity.toast_duration();

        for sink in &self.sinks {
            if let Err(e) = sink.notify(severity, title, message, duration) {
                log::warn!("Failed to notify via {}: {}", sink.name(), e);
            }
        }
    }

    /// Number of registered sinks
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        let mut manager = Self::new();
        manager.add_sink(Box::new(TerminalNotifier::new()));
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_notifier_creation() {
        let sink = TerminalNotifier::new();
        assert_eq!(sink.name(), "terminal");
        assert!(sink.use_stderr);
    }

    #[test]
    fn test_terminal_notifier_stdout() {
        let sink = TerminalNotifier::stdout();
        assert!(!sink.use_stderr);
    }

    #[test]
    fn test_format_without_colors() {
        let sink = TerminalNotifier::no_color();
        let line = sink.format_line(
            Severity::Critical,
            Severity::Critical.title(),
            "Power draw above limit",
        );
        assert_eq!(
            line,
            "[CRITICAL] Immediate action required: Power draw above limit"
        );
    }

    #[test]
    fn test_manager_counts_sinks() {
        let mut manager = NotificationManager::new();
        assert_eq!(manager.sink_count(), 0);
        manager.add_sink(Box::new(TerminalNotifier::no_color()));
        assert_eq!(manager.sink_count(), 1);
    }

    #[test]
    fn test_manager_default_has_terminal() {
        let manager = NotificationManager::default();
        assert_eq!(manager.sink_count(), 1);
    }

    #[test]
    fn test_dispatch_does_not_panic() {
        let mut manager = NotificationManager::new();
        manager.add_sink(Box::new(TerminalNotifier::stdout()));
        manager.dispatch(Severity::Info, "Mode changed to ECO");
    }
}
