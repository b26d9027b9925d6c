//! Per-symbol strategy parameters as configured in the watchlist.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

fn default_precision() -> usize {
    2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MeanReversion,
    TrendFollowing,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::MeanReversion => f.write_str("mean_reversion"),
            StrategyKind::TrendFollowing => f.write_str("trend_following"),
        }
    }
}

/// RSI thresholds for one mean-reversion instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanReversionParams {
    pub rsi_period: usize,
    pub rsi_buy_threshold: f64,
    pub rsi_sell_threshold: f64,
    pub rsi_exit_long: f64,
    pub rsi_exit_short: f64,
    #[serde(default = "default_precision")]
    pub display_precision: usize,
    /// Emit an RSI-vs-target line for open positions that did not hit the exit.
    #[serde(default)]
    pub report_status: bool,
}

impl MeanReversionParams {
    pub fn new(
        rsi_period: usize,
        rsi_buy_threshold: f64,
        rsi_sell_threshold: f64,
        rsi_exit_long: f64,
        rsi_exit_short: f64,
    ) -> Self {
        Self {
            rsi_period,
            rsi_buy_threshold,
            rsi_sell_threshold,
            rsi_exit_long,
            rsi_exit_short,
            display_precision: default_precision(),
            report_status: false,
        }
    }

    pub fn with_status_reports(mut self) -> Self {
        self.report_status = true;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rsi_period == 0 {
            return Err(ConfigError::Invalid("rsi_period must be at least 1".into()));
        }
        let thresholds = [
            self.rsi_buy_threshold,
            self.rsi_sell_threshold,
            self.rsi_exit_long,
            self.rsi_exit_short,
        ];
        if thresholds.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(ConfigError::Invalid(
                "RSI thresholds must lie within 0..=100".into(),
            ));
        }
        Ok(())
    }
}

/// Channel, EMA and ATR settings for one trend-following instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFollowingParams {
    pub entry_channel_period: usize,
    pub exit_channel_period: usize,
    pub ema_period: usize,
    pub atr_period: usize,
    pub atr_stop_multiplier: f64,
    #[serde(default = "default_precision")]
    pub display_precision: usize,
}

impl TrendFollowingParams {
    pub fn new(
        entry_channel_period: usize,
        exit_channel_period: usize,
        ema_period: usize,
        atr_period: usize,
        atr_stop_multiplier: f64,
    ) -> Self {
        Self {
            entry_channel_period,
            exit_channel_period,
            ema_period,
            atr_period,
            atr_stop_multiplier,
            display_precision: default_precision(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("entry_channel_period", self.entry_channel_period),
            ("exit_channel_period", self.exit_channel_period),
            ("ema_period", self.ema_period),
            ("atr_period", self.atr_period),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(ConfigError::Invalid(format!("{} must be at least 1", name)));
        }
        if !self.atr_stop_multiplier.is_finite() || self.atr_stop_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "atr_stop_multiplier must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyParams {
    MeanReversion(MeanReversionParams),
    TrendFollowing(TrendFollowingParams),
}

impl StrategyParams {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyParams::MeanReversion(_) => StrategyKind::MeanReversion,
            StrategyParams::TrendFollowing(_) => StrategyKind::TrendFollowing,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StrategyParams::MeanReversion(p) => p.validate(),
            StrategyParams::TrendFollowing(p) => p.validate(),
        }
    }
}

/// A symbol paired with the strategy that watches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub symbol: String,
    #[serde(flatten)]
    pub params: StrategyParams,
}

impl WatchEntry {
    pub fn mean_reversion(symbol: impl Into<String>, params: MeanReversionParams) -> Self {
        Self {
            symbol: symbol.into(),
            params: StrategyParams::MeanReversion(params),
        }
    }

    pub fn trend_following(symbol: impl Into<String>, params: TrendFollowingParams) -> Self {
        Self {
            symbol: symbol.into(),
            params: StrategyParams::TrendFollowing(params),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("watch entry with empty symbol".into()));
        }
        self.params
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", self.symbol, e)))
    }
}
