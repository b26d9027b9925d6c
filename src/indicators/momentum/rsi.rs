//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiIndicator;
use crate::models::market::PriceSeries;

/// RSI over a close series using Wilder smoothing (alpha = 1/period).
///
/// RSI = 100 - (100 / (1 + avg_gain / avg_loss))
///
/// The first bar has no predecessor and contributes a zero gain and zero
/// loss, so the first defined value appears once `period` observations have
/// accumulated. A window with losses of zero saturates at 100; a window with
/// no movement at all has no defined RSI.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 {
        return out;
    }

    let alpha = 1.0 / period as f64;
    let mut averages: Option<(f64, f64)> = None;
    let mut prev_close: Option<f64> = None;

    for (i, &close) in closes.iter().enumerate() {
        let delta = prev_close.map_or(0.0, |prev| close - prev);
        prev_close = Some(close);
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        let (avg_gain, avg_loss) = match averages {
            Some((g, l)) => (alpha * gain + (1.0 - alpha) * g, alpha * loss + (1.0 - alpha) * l),
            None => (gain, loss),
        };
        averages = Some((avg_gain, avg_loss));

        if i + 1 >= period {
            out[i] = rsi_from_averages(avg_gain, avg_loss);
        }
    }

    out
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        // 0/0: price never moved inside the smoothing window
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Latest RSI value of a price series.
pub fn calculate_rsi(series: &PriceSeries, period: usize) -> Option<RsiIndicator> {
    let values = rsi_series(&series.closes(), period);
    math::last_defined(&values).map(|value| RsiIndicator { value, period })
}
