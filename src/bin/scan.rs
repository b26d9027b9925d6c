//! Straznik one-shot scan
//!
//! Evaluates the watchlist once, sends the aggregated alert (if any) and exits.
//! Meant to be driven by an external scheduler such as cron or a CI job.

use dotenvy::dotenv;
use straznik::config::{get_environment, Settings};
use straznik::core::build_scanner;
use straznik::logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    info!(environment = %get_environment(), "Starting Straznik scan");

    let settings = Settings::from_env()?;
    let scanner = build_scanner(&settings)?;
    let outcome = scanner.run_once().await;

    if let Some(report) = &outcome.report {
        if !outcome.delivered {
            println!("{}", report);
        }
    }

    info!(
        alerts = outcome.alerts.len(),
        unavailable = ?outcome.unavailable,
        delivered = outcome.delivered,
        "Scan finished"
    );
    Ok(())
}
