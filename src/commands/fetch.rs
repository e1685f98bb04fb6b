//! Fetch command handler
//!
//! One-shot snapshot retrieval, the CLI counterpart of the dashboard's
//! manual refresh action.

use crate::cli::args::{FetchArgs, OutputFormat};
use crate::cli::output::{print_output, SnapshotView};
use crate::config::Config;
use crate::error::Result;
use crate::gateway::{GatewayClient, SnapshotSource};
use crate::services::LinkStatus;

/// Fetch and print a single snapshot
pub fn run_fetch(args: &FetchArgs, format: OutputFormat, mut config: Config) -> Result<()> {
    if let Some(url) = &args.url {
        config.gateway.base_url = url.clone();
    }
    config.validate()?;

    let client = GatewayClient::new(config.gateway.clone())?;
    log::debug!("Fetching {}", client.snapshot_url());

    let snapshot = client.fetch_latest()?;
    let link = match &snapshot.transport_error {
        Some(err) => LinkStatus::UpstreamError(err.clone()),
        None => LinkStatus::Connected,
    };

    print_output(&SnapshotView::new(&snapshot, &link), format)?;
    Ok(())
}
