//! Instruments to scan, their strategy parameters, and open positions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::position::PositionStatus;
use crate::models::strategy::{MeanReversionParams, TrendFollowingParams, WatchEntry};
use crate::services::positions::StaticPositionBook;

/// Mean-reversion instruments: symbol, RSI period, buy, sell, exit long, exit short.
const MEAN_REVERSION_PORTFOLIO: &[(&str, usize, f64, f64, f64, f64)] = &[
    ("CC=F", 5, 10.0, 90.0, 50.0, 50.0),
    ("CT=F", 5, 30.0, 80.0, 50.0, 40.0),
    ("GC=F", 14, 30.0, 90.0, 60.0, 50.0),
    ("CL=F", 14, 10.0, 70.0, 60.0, 40.0),
    ("BZ=F", 14, 10.0, 70.0, 60.0, 40.0),
    ("RB=F", 14, 10.0, 70.0, 50.0, 50.0),
    ("SI=F", 5, 10.0, 90.0, 50.0, 50.0),
    ("^FTSE", 14, 30.0, 80.0, 50.0, 50.0),
    ("ZW=F", 14, 30.0, 80.0, 50.0, 50.0),
    ("^GDAXI", 14, 30.0, 80.0, 60.0, 50.0),
    ("^FCHI", 5, 20.0, 90.0, 60.0, 50.0),
    ("^STOXX50E", 5, 30.0, 90.0, 50.0, 40.0),
    ("^NDX", 3, 30.0, 90.0, 60.0, 40.0),
    ("^GSPC", 5, 20.0, 90.0, 50.0, 50.0),
    ("^VIX", 3, 30.0, 70.0, 60.0, 50.0),
    ("^N225", 5, 10.0, 90.0, 60.0, 40.0),
    ("GBPPLN=X", 3, 20.0, 70.0, 60.0, 40.0),
    ("GBPJPY=X", 14, 30.0, 90.0, 60.0, 50.0),
];

/// Trend-following instruments: symbol, entry channel, exit channel, EMA, ATR, ATR multiplier.
const TREND_PORTFOLIO: &[(&str, usize, usize, usize, usize, f64)] = &[
    ("GC=F", 20, 10, 50, 14, 2.0),
    ("^GSPC", 20, 10, 50, 14, 2.0),
];

const DEFAULT_POSITIONS: &[(&str, PositionStatus)] = &[("^STOXX50E", PositionStatus::Short)];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    /// Scan order is entry order.
    #[serde(default)]
    pub entries: Vec<WatchEntry>,
    /// Symbols without an entry here are flat.
    #[serde(default)]
    pub positions: HashMap<String, PositionStatus>,
}

impl Watchlist {
    pub fn builtin() -> Self {
        let mut entries: Vec<WatchEntry> = MEAN_REVERSION_PORTFOLIO
            .iter()
            .map(|&(symbol, period, buy, sell, exit_long, exit_short)| {
                WatchEntry::mean_reversion(
                    symbol,
                    MeanReversionParams::new(period, buy, sell, exit_long, exit_short),
                )
            })
            .collect();
        entries.extend(TREND_PORTFOLIO.iter().map(
            |&(symbol, entry, exit, ema, atr, multiplier)| {
                WatchEntry::trend_following(
                    symbol,
                    TrendFollowingParams::new(entry, exit, ema, atr, multiplier),
                )
            },
        ));

        let positions = DEFAULT_POSITIONS
            .iter()
            .map(|&(symbol, status)| (symbol.to_string(), status))
            .collect();

        Self { entries, positions }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let watchlist: Watchlist = serde_json::from_str(raw)?;
        watchlist.validate()?;
        Ok(watchlist)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.entries.iter().try_for_each(WatchEntry::validate)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct symbols in first-seen order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.symbol.as_str()) {
                seen.push(&entry.symbol);
            }
        }
        seen
    }

    pub fn position_book(&self) -> StaticPositionBook {
        StaticPositionBook::new(self.positions.clone())
    }
}
