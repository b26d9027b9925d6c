//! RSI mean-reversion: scan for oversold/overbought entries while flat,
//! watch for the RSI take-profit level while a position is open.

use crate::indicators::momentum::calculate_rsi;
use crate::models::indicators::MeanReversionSnapshot;
use crate::models::market::PriceSeries;
use crate::models::position::PositionStatus;
use crate::models::signal::{AlertKind, AlertRecord};
use crate::models::strategy::{MeanReversionParams, StrategyKind};

pub struct MeanReversionEvaluator;

impl MeanReversionEvaluator {
    /// Compute the latest RSI and close. `None` while RSI is still warming up.
    pub fn snapshot(
        series: &PriceSeries,
        params: &MeanReversionParams,
    ) -> Option<MeanReversionSnapshot> {
        let last = series.last()?;
        let rsi = calculate_rsi(series, params.rsi_period)?;
        Some(MeanReversionSnapshot {
            rsi: rsi.value,
            last_price: last.close,
            last_date: last.date,
        })
    }

    /// Apply the entry or exit rules selected by the current position.
    pub fn decide(
        symbol: &str,
        snapshot: &MeanReversionSnapshot,
        params: &MeanReversionParams,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        let rsi = snapshot.rsi;
        let date = snapshot.last_date.format("%Y-%m-%d");
        let price = format!("{:.*}", params.display_precision, snapshot.last_price);

        let (kind, text) = match position {
            PositionStatus::Flat => {
                if rsi < params.rsi_buy_threshold {
                    let text = format!(
                        "🟢 *LONG SETUP* [{}]\n{}: RSI {:.1} (< {})\nPrice: {}",
                        date, symbol, rsi, params.rsi_buy_threshold, price
                    );
                    (AlertKind::EntryLong, text)
                } else if rsi > params.rsi_sell_threshold {
                    let text = format!(
                        "🔴 *SHORT SETUP* [{}]\n{}: RSI {:.1} (> {})\nPrice: {}",
                        date, symbol, rsi, params.rsi_sell_threshold, price
                    );
                    (AlertKind::EntryShort, text)
                } else {
                    return None;
                }
            }
            PositionStatus::Long => {
                if rsi > params.rsi_exit_long {
                    let text = format!(
                        "💰 *CLOSE LONG* [{}]\n{}: RSI {:.1} crossed above {}\nPrice: {}",
                        date, symbol, rsi, params.rsi_exit_long, price
                    );
                    (AlertKind::ExitLong, text)
                } else if params.report_status {
                    let text = format!(
                        "ℹ️ *LONG OPEN* [{}]\n{}: RSI {:.1}, exit above {}\nPrice: {}",
                        date, symbol, rsi, params.rsi_exit_long, price
                    );
                    (AlertKind::Status, text)
                } else {
                    return None;
                }
            }
            PositionStatus::Short => {
                if rsi < params.rsi_exit_short {
                    let text = format!(
                        "💰 *CLOSE SHORT* [{}]\n{}: RSI {:.1} crossed below {}\nPrice: {}",
                        date, symbol, rsi, params.rsi_exit_short, price
                    );
                    (AlertKind::ExitShort, text)
                } else if params.report_status {
                    let text = format!(
                        "ℹ️ *SHORT OPEN* [{}]\n{}: RSI {:.1}, exit below {}\nPrice: {}",
                        date, symbol, rsi, params.rsi_exit_short, price
                    );
                    (AlertKind::Status, text)
                } else {
                    return None;
                }
            }
        };

        Some(AlertRecord::new(symbol, StrategyKind::MeanReversion, kind, text))
    }

    pub fn evaluate(
        series: &PriceSeries,
        params: &MeanReversionParams,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        let snapshot = Self::snapshot(series, params)?;
        Self::decide(series.symbol(), &snapshot, params, position)
    }
}
