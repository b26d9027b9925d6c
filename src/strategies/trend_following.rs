//! Donchian breakout with an EMA trend filter, and a channel/ATR "smart stop"
//! for open positions.

use crate::common::math;
use crate::indicators::structure::calculate_donchian;
use crate::indicators::trend::ema_series;
use crate::indicators::volatility::atr_series;
use crate::models::indicators::TrendSnapshot;
use crate::models::market::PriceSeries;
use crate::models::position::PositionStatus;
use crate::models::signal::{AlertKind, AlertRecord};
use crate::models::strategy::{StrategyKind, TrendFollowingParams};

/// Breakout channels exclude the bar being evaluated.
const CHANNEL_SHIFT: usize = 1;

/// Stop for a long: the higher of the exit-channel low and the ATR trailing
/// stop hung below the recent high.
pub fn smart_stop_long(exit_low: f64, anchor_high: f64, atr: f64, multiplier: f64) -> f64 {
    exit_low.max(anchor_high - multiplier * atr)
}

/// Stop for a short: the lower of the exit-channel high and the ATR trailing
/// stop hung above the recent low.
pub fn smart_stop_short(exit_high: f64, anchor_low: f64, atr: f64, multiplier: f64) -> f64 {
    exit_high.min(anchor_low + multiplier * atr)
}

pub struct TrendFollowingEvaluator;

impl TrendFollowingEvaluator {
    /// Compute EMA, ATR, entry/exit channels and stop anchors for the last bar.
    /// `None` until every indicator has enough history.
    pub fn snapshot(series: &PriceSeries, params: &TrendFollowingParams) -> Option<TrendSnapshot> {
        let last = series.last()?;
        if series.len() < params.ema_period {
            return None;
        }

        let ema = math::last_defined(&ema_series(&series.closes(), params.ema_period))?;
        let atr = math::last_defined(&atr_series(series.bars(), params.atr_period))?;
        let entry_channel = calculate_donchian(series, params.entry_channel_period, CHANNEL_SHIFT)?;
        let exit_channel = calculate_donchian(series, params.exit_channel_period, CHANNEL_SHIFT)?;
        let anchor = calculate_donchian(series, params.entry_channel_period, 0)?;

        Some(TrendSnapshot {
            ema,
            atr,
            entry_channel,
            exit_channel,
            anchor_high: anchor.upper,
            anchor_low: anchor.lower,
            last_price: last.close,
            last_date: last.date,
        })
    }

    pub fn decide(
        symbol: &str,
        snapshot: &TrendSnapshot,
        params: &TrendFollowingParams,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        let prec = params.display_precision;
        let close = snapshot.last_price;
        let date = snapshot.last_date.format("%Y-%m-%d");
        let k = params.atr_stop_multiplier;

        let (kind, text) = match position {
            PositionStatus::Flat => {
                let channel = &snapshot.entry_channel;
                if close > snapshot.ema && close > channel.upper {
                    let text = format!(
                        "🚀 *BREAKOUT LONG* [{}]\n{}: close {:.*} > {}-bar high {:.*}\nEMA({}) {:.*}",
                        date, symbol, prec, close, channel.period, prec, channel.upper,
                        params.ema_period, prec, snapshot.ema
                    );
                    (AlertKind::EntryLong, text)
                } else if close < snapshot.ema && close < channel.lower {
                    let text = format!(
                        "📉 *BREAKOUT SHORT* [{}]\n{}: close {:.*} < {}-bar low {:.*}\nEMA({}) {:.*}",
                        date, symbol, prec, close, channel.period, prec, channel.lower,
                        params.ema_period, prec, snapshot.ema
                    );
                    (AlertKind::EntryShort, text)
                } else {
                    return None;
                }
            }
            PositionStatus::Long => {
                let atr_stop = snapshot.anchor_high - k * snapshot.atr;
                let stop = smart_stop_long(snapshot.exit_channel.lower, snapshot.anchor_high, snapshot.atr, k);
                let breached = close < stop;
                let headline = if breached {
                    "🚨 *STOP BREACHED (LONG)*"
                } else {
                    "🛡️ *LONG*"
                };
                let text = format!(
                    "{} [{}]\n{}: price {:.*}, stop {:.*}\nchannel {:.*} | ATR stop {:.*}",
                    headline, date, symbol, prec, close, prec, stop,
                    prec, snapshot.exit_channel.lower, prec, atr_stop
                );
                let kind = if breached {
                    AlertKind::StopBreach
                } else {
                    AlertKind::Status
                };
                (kind, text)
            }
            PositionStatus::Short => {
                let atr_stop = snapshot.anchor_low + k * snapshot.atr;
                let stop = smart_stop_short(snapshot.exit_channel.upper, snapshot.anchor_low, snapshot.atr, k);
                let breached = close > stop;
                let headline = if breached {
                    "🚨 *STOP BREACHED (SHORT)*"
                } else {
                    "🛡️ *SHORT*"
                };
                let text = format!(
                    "{} [{}]\n{}: price {:.*}, stop {:.*}\nchannel {:.*} | ATR stop {:.*}",
                    headline, date, symbol, prec, close, prec, stop,
                    prec, snapshot.exit_channel.upper, prec, atr_stop
                );
                let kind = if breached {
                    AlertKind::StopBreach
                } else {
                    AlertKind::Status
                };
                (kind, text)
            }
        };

        Some(AlertRecord::new(symbol, StrategyKind::TrendFollowing, kind, text))
    }

    pub fn evaluate(
        series: &PriceSeries,
        params: &TrendFollowingParams,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        let snapshot = Self::snapshot(series, params)?;
        Self::decide(series.symbol(), &snapshot, params, position)
    }
}
