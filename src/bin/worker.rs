//! Straznik Worker
//!
//! Long-running process that scans the watchlist on a cron schedule
//! (`SCAN_SCHEDULE`) until interrupted.

use dotenvy::dotenv;
use std::sync::Arc;
use straznik::config::{get_environment, Settings};
use straznik::core::{build_scanner, ScanScheduler};
use straznik::logging;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    info!("Starting Straznik Worker");
    info!(environment = %get_environment(), "Environment");

    let settings = Settings::from_env()?;
    let scanner = Arc::new(build_scanner(&settings)?);

    let scheduler = ScanScheduler::new(scanner, &settings.schedule)?;
    if let Some(next) = scheduler.next_run() {
        info!(cron = %scheduler.expression(), next = %next, "First scan scheduled");
    }
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;

    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");
    Ok(())
}
