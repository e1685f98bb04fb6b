//! Watch command handler
//!
//! Runs the polling loop against the configured gateway, dispatching
//! alerts to the terminal sink as they are emitted.

use crate::alerts::NotificationManager;
use crate::cli::args::{OutputFormat, WatchArgs};
use crate::cli::output::{print_output, SnapshotView};
use crate::config::Config;
use crate::error::Result;
use crate::gateway::GatewayClient;
use crate::services::Monitor;

/// Run the polling loop
pub fn run_watch(args: &WatchArgs, format: OutputFormat, mut config: Config) -> Result<()> {
    // CLI flags override the config file
    if let Some(interval) = args.interval {
        config.poll.interval_secs = interval;
    }
    if let Some(policy) = args.policy {
        config.alerts.policy = policy.into();
    }
    if let Some(url) = &args.url {
        config.gateway.base_url = url.clone();
    }
    config.validate()?;

    let client = GatewayClient::new(config.gateway.clone())?;
    let monitor = Monitor::new(config.monitor_config(args.once));
    let mut session = monitor.session();
    let sinks = NotificationManager::default();

    log::info!(
        "Watching {} every {}s",
        client.snapshot_url(),
        config.poll.interval_secs
    );

    monitor.run(&client, &mut session, &sinks);

    // Only single-use mode returns; show what the tick saw
    if args.once {
        if let Some(snapshot) = session.last_snapshot() {
            print_output(&SnapshotView::new(snapshot, session.link()), format)?;
        }
        for entry in session.log().iter() {
            log::info!("Logged alert: {}", entry);
        }
    }

    Ok(())
}
