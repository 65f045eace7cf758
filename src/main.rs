// Standard library
use std::sync::Arc;

// 3rd party crates
use tracing::{error, info};

// Project modules
mod checker;
mod functions;
mod geo;
mod prober;
mod resolver;
mod settings;
mod utility;

// Project imports
use crate::settings::constants::DEFAULT_LOG_LEVEL;
use crate::settings::types::ConfigManager;
use crate::utility::logging;

/// One-shot CDN edge check.
///
/// For every configured hostname and every labelled DNS server under it,
/// the tool resolves the hostname against that server, geolocates the
/// resolved IP, and probes it with a few ICMP echoes. Everything is
/// rendered to a per-run log file under `logs/` and mirrored to the
/// console. The run is fully sequential; a failed pair is logged and
/// skipped, never fatal.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    // Settings first; the log level lives there. A broken configuration
    // still gets a run log, at the default level, with the error in it.
    let config = ConfigManager::new().await;
    let level = match &config {
        Ok(manager) => manager.get_log_level().await,
        Err(_) => DEFAULT_LOG_LEVEL.to_string(),
    };

    let run_log = match logging::init(&level) {
        Ok(run_log) => run_log,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            return;
        }
    };

    let config: Arc<ConfigManager> = match config {
        Ok(manager) => Arc::new(manager),
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };

    info!("Settings have been loaded.");
    info!("Logging to {}", run_log.path().display());

    if let Err(e) = functions::run(config).await {
        error!("FAIL!: {}", e);
    }
}
