//! Cron-based scheduler that runs a scan on every tick

use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::core::scanner::Scanner;
use crate::error::ConfigError;

pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    schedule: Schedule,
    expression: String,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a scheduler from a six-field cron expression
    /// (`sec min hour day-of-month month day-of-week`).
    pub fn new(scanner: Arc<Scanner>, expression: &str) -> Result<Self, ConfigError> {
        let schedule = Schedule::from_str(expression).map_err(|e| ConfigError::Schedule {
            expression: expression.to_string(),
            message: e.to_string(),
        })?;

        info!(cron = %expression, "ScanScheduler: created");

        Ok(Self {
            scanner,
            schedule,
            expression: expression.to_string(),
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Next fire time after now, if the expression has one.
    pub fn next_run(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Start the scheduling loop in the background
    pub async fn start(&self) {
        let scanner = self.scanner.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    warn!("ScanScheduler: schedule has no upcoming runs, stopping");
                    break;
                };

                let now = chrono::Utc::now();
                if next_tick > now {
                    let duration = (next_tick - now).to_std().unwrap_or_default();
                    info!(next = %next_tick, "ScanScheduler: sleeping until next run");
                    tokio::time::sleep(duration).await;
                }

                let outcome = scanner.run_once().await;
                info!(
                    alerts = outcome.alerts.len(),
                    delivered = outcome.delivered,
                    "ScanScheduler: tick finished"
                );
            }
        });

        let mut h = self.handle.write().await;
        if let Some(previous) = h.replace(handle) {
            previous.abort();
        }
        info!("ScanScheduler: started successfully");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
