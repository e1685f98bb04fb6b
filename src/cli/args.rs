//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::alerts::PolicyKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Polling telemetry monitor for IoT gateways
///
/// Watches a gateway's sensor endpoint and raises rule-based alerts when
/// readings cross thresholds or the reported system status changes.
#[derive(Parser, Debug)]
#[command(name = "twinmon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TWINMON_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the polling loop and surface alerts
    Watch(WatchArgs),

    /// Fetch and print a single snapshot
    Fetch(FetchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Run a single poll tick and exit
    #[arg(long)]
    pub once: bool,

    /// Override the polling interval in seconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override the alert classification policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Override the gateway base URL
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Override the gateway base URL
    #[arg(long)]
    pub url: Option<String>,
}

/// Alert policy argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PolicyArg {
    /// Critical-only alerts with a cooldown window
    Threshold,
    /// Alert on every system message change
    Transition,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Threshold => PolicyKind::Threshold,
            PolicyArg::Transition => PolicyKind::Transition,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

/// Generate shell completions to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
