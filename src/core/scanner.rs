//! One sequential pass over the watchlist: fetch, evaluate, aggregate, notify.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::config::Watchlist;
use crate::models::market::PriceSeries;
use crate::models::signal::AlertRecord;
use crate::services::market_data::{Lookback, MarketDataProvider};
use crate::services::notifier::Notifier;
use crate::services::positions::PositionBook;
use crate::signals::report::Report;
use crate::strategies::evaluator::StrategyEvaluator;

/// What a single scan produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub scanned_at: DateTime<Utc>,
    pub alerts: Vec<AlertRecord>,
    /// Symbols the provider had no data for.
    pub unavailable: Vec<String>,
    /// Symbols whose history was too short for at least one of their strategies.
    pub warming_up: Vec<String>,
    pub report: Option<String>,
    pub delivered: bool,
}

impl ScanOutcome {
    fn new(scanned_at: DateTime<Utc>) -> Self {
        Self {
            scanned_at,
            alerts: Vec::new(),
            unavailable: Vec::new(),
            warming_up: Vec::new(),
            report: None,
            delivered: false,
        }
    }
}

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    positions: Arc<dyn PositionBook + Send + Sync>,
    notifier: Option<Arc<dyn Notifier + Send + Sync>>,
    watchlist: Watchlist,
    lookback: Lookback,
}

impl Scanner {
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        positions: Arc<dyn PositionBook + Send + Sync>,
        watchlist: Watchlist,
    ) -> Self {
        Self {
            provider,
            positions,
            notifier: None,
            watchlist,
            lookback: Lookback::default(),
        }
    }

    /// Without a notifier the report is still built but never sent.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier + Send + Sync>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_lookback(mut self, lookback: Lookback) -> Self {
        self.lookback = lookback;
        self
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub async fn run_once(&self) -> ScanOutcome {
        self.run_at(Utc::now()).await
    }

    /// Run a scan stamped with `scanned_at`. Never fails: unavailable data and
    /// delivery errors are logged and reflected in the outcome.
    pub async fn run_at(&self, scanned_at: DateTime<Utc>) -> ScanOutcome {
        let mut outcome = ScanOutcome::new(scanned_at);
        let mut histories: HashMap<&str, Option<PriceSeries>> = HashMap::new();

        info!(
            entries = self.watchlist.entries.len(),
            range = %self.lookback.range,
            interval = %self.lookback.interval,
            "Scanner: starting scan"
        );

        for entry in &self.watchlist.entries {
            let symbol = entry.symbol.as_str();

            if !histories.contains_key(symbol) {
                let fetched = self.fetch(symbol).await;
                if fetched.is_none() {
                    outcome.unavailable.push(symbol.to_string());
                }
                histories.insert(symbol, fetched);
            }
            let Some(series) = histories.get(symbol).and_then(Option::as_ref) else {
                continue;
            };

            let Some(snapshot) = StrategyEvaluator::snapshot(entry, series) else {
                debug!(
                    symbol = %symbol,
                    strategy = %entry.params.kind(),
                    bars = series.len(),
                    "Scanner: not enough history, skipping"
                );
                if !outcome.warming_up.iter().any(|s| s == symbol) {
                    outcome.warming_up.push(symbol.to_string());
                }
                continue;
            };

            let position = self.positions.position(symbol);
            match StrategyEvaluator::decide(entry, &snapshot, position) {
                Some(alert) => {
                    info!(
                        symbol = %symbol,
                        strategy = %alert.strategy,
                        kind = ?alert.kind,
                        position = %position,
                        "Scanner: alert"
                    );
                    outcome.alerts.push(alert);
                }
                None => {
                    debug!(
                        symbol = %symbol,
                        strategy = %entry.params.kind(),
                        position = %position,
                        price = snapshot.last_price(),
                        "Scanner: no signal"
                    );
                }
            }
        }

        outcome.report = Report::compose(&outcome.alerts, scanned_at);
        match (&outcome.report, &self.notifier) {
            (None, _) => {
                info!("Scanner: no signals this run");
            }
            (Some(_), None) => {
                warn!(
                    alerts = outcome.alerts.len(),
                    "Scanner: notification target not configured, skipping delivery"
                );
            }
            (Some(report), Some(notifier)) => match notifier.send(report).await {
                Ok(()) => outcome.delivered = true,
                Err(e) => {
                    error!(error = %e, "Scanner: failed to deliver report");
                }
            },
        }

        info!(
            alerts = outcome.alerts.len(),
            unavailable = outcome.unavailable.len(),
            warming_up = outcome.warming_up.len(),
            delivered = outcome.delivered,
            "Scanner: scan complete"
        );
        outcome
    }

    async fn fetch(&self, symbol: &str) -> Option<PriceSeries> {
        match self.provider.get_history(symbol, &self.lookback).await {
            Ok(series) if series.is_empty() => {
                warn!(symbol = %symbol, "Scanner: provider returned no bars");
                None
            }
            Ok(series) => Some(series),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Scanner: data unavailable");
                None
            }
        }
    }
}
