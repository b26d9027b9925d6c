use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub span: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonchianChannel {
    pub upper: f64,
    pub lower: f64,
    pub period: usize,
}

/// Latest values the mean-reversion rules read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanReversionSnapshot {
    pub rsi: f64,
    pub last_price: f64,
    pub last_date: NaiveDate,
}

/// Latest values the trend-following rules read.
///
/// `entry_channel` and `exit_channel` exclude the evaluated bar; the anchor
/// extremes used by the ATR trailing stop include it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSnapshot {
    pub ema: f64,
    pub atr: f64,
    pub entry_channel: DonchianChannel,
    pub exit_channel: DonchianChannel,
    pub anchor_high: f64,
    pub anchor_low: f64,
    pub last_price: f64,
    pub last_date: NaiveDate,
}

/// Indicator state recomputed from scratch on every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum IndicatorSnapshot {
    MeanReversion(MeanReversionSnapshot),
    TrendFollowing(TrendSnapshot),
}

impl IndicatorSnapshot {
    pub fn last_price(&self) -> f64 {
        match self {
            IndicatorSnapshot::MeanReversion(s) => s.last_price,
            IndicatorSnapshot::TrendFollowing(s) => s.last_price,
        }
    }

    pub fn last_date(&self) -> NaiveDate {
        match self {
            IndicatorSnapshot::MeanReversion(s) => s.last_date,
            IndicatorSnapshot::TrendFollowing(s) => s.last_date,
        }
    }
}
