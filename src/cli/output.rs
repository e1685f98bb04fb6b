//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::SensorSnapshot;
use crate::services::LinkStatus;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Snapshot view for display
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotView {
    pub link: String,
    pub mode: Option<String>,
    pub message: Option<String>,
    pub alert_level: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub motion: Option<bool>,
    pub current: Option<f64>,
    pub power: Option<f64>,
    pub people_count: Option<u32>,
}

impl SnapshotView {
    /// Build a view from a snapshot and the session's link indicator
    pub fn new(snapshot: &SensorSnapshot, link: &LinkStatus) -> Self {
        Self {
            link: link.to_string(),
            mode: snapshot.system_mode.clone(),
            message: snapshot.message().map(String::from),
            alert_level: snapshot.alert_level.to_string(),
            temperature: snapshot.temperature,
            humidity: snapshot.humidity,
            motion: snapshot.motion_detected(),
            current: snapshot.current,
            power: snapshot.power,
            people_count: snapshot.people_count,
        }
    }
}

fn fmt_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "--".to_string(),
    }
}

impl TableDisplay for SnapshotView {
    fn to_table(&self) -> String {
        let mut output = format!("Link: {}\n", self.link);

        if let Some(mode) = &self.mode {
            output.push_str(&format!("Mode: {}\n", mode));
        }
        output.push_str(&format!("Alert level: {}\n", self.alert_level));
        if let Some(message) = &self.message {
            output.push_str(&format!("Status: {}\n", message));
        }

        output.push('\n');
        output.push_str(&format!(
            "Temperature: {}\n",
            fmt_reading(self.temperature, " C")
        ));
        output.push_str(&format!("Humidity:    {}\n", fmt_reading(self.humidity, " %")));
        output.push_str(&format!(
            "Motion:      {}\n",
            match self.motion {
                Some(true) => "detected",
                Some(false) => "none",
                None => "--",
            }
        ));
        output.push_str(&format!("Power:       {}\n", fmt_reading(self.power, " W")));
        output.push_str(&format!("Current:     {}\n", fmt_reading(self.current, " A")));
        output.push_str(&format!(
            "People:      {}\n",
            self.people_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "--".to_string())
        ));

        output
    }

    fn to_compact(&self) -> String {
        format!(
            "{} | {} | temp={} hum={} power={}",
            self.link,
            self.alert_level,
            fmt_reading(self.temperature, "C"),
            fmt_reading(self.humidity, "%"),
            fmt_reading(self.power, "W"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertLevel;

    fn view() -> SnapshotView {
        let snapshot = SensorSnapshot {
            temperature: Some(28.4),
            humidity: Some(51.0),
            motion: Some(1),
            power: Some(512.0),
            system_mode: Some("ACTIVE".to_string()),
            system_message: Some("Power draw above limit".to_string()),
            alert_level: AlertLevel::Critical,
            ..Default::default()
        };
        SnapshotView::new(&snapshot, &LinkStatus::Connected)
    }

    #[test]
    fn test_table_includes_readings() {
        let table = view().to_table();
        assert!(table.contains("Mode: ACTIVE"));
        assert!(table.contains("Alert level: critical"));
        assert!(table.contains("Status: Power draw above limit"));
        assert!(table.contains("detected"));
    }

    #[test]
    fn test_table_marks_missing_sensors() {
        let snapshot = SensorSnapshot::default();
        let table = SnapshotView::new(&snapshot, &LinkStatus::Initializing).to_table();
        // Absent sensors render as placeholders, never as zero
        assert!(table.contains("Temperature: --"));
        assert!(table.contains("People:      --"));
    }

    #[test]
    fn test_compact_is_single_line() {
        let compact = view().to_compact();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("critical"));
    }

    #[test]
    fn test_view_serializes_to_json() {
        let json = serde_json::to_string(&view()).unwrap();
        assert!(json.contains("\"alert_level\":\"critical\""));
    }
}
