// Standard library
use std::error::Error;
use std::sync::Arc;

// 3rd party crates
use tracing::info;

// Project imports
use crate::checker::types::EdgeCheck;
use crate::geo::types::GeoClient;
use crate::prober::types::IcmpProber;
use crate::resolver::types::DnsResolver;
use crate::settings::types::{ConfigManager, ServerSpec};

/// Runs one full edge check over the configured targets: for every
/// (hostname, label) pair, resolve against that label's DNS server,
/// geolocate the answer, and probe its latency.
pub async fn run(config: Arc<ConfigManager>) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings().await;
    let targets: ServerSpec = settings.get_targets();

    let check = EdgeCheck::new(
        Arc::new(DnsResolver::new()),
        Arc::new(GeoClient::new(settings.geo.clone())?),
        Arc::new(IcmpProber::new(settings.probe.clone())?),
    );

    // The collaborators hold their own copies of the relevant sections.
    drop(settings);

    info!("Checking {} hostnames", targets.len());
    let report = check.run(&targets).await;
    info!(
        "Run finished: {} pairs checked, {} skipped",
        report.completed, report.skipped
    );

    Ok(())
}
