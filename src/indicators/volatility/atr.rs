//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::indicators::AtrIndicator;
use crate::models::market::{PriceBar, PriceSeries};

/// True range per bar. The first bar has no previous close and stays undefined.
pub fn true_range_series(bars: &[PriceBar]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        if i == 0 {
            out.push(None);
            continue;
        }
        out.push(Some(math::true_range(bar.high, bar.low, bars[i - 1].close)));
    }
    out
}

/// ATR as the simple moving average of true range over `period` bars.
///
/// Deliberately not Wilder-smoothed: the value reacts to the raw range of
/// the last `period` sessions only.
pub fn atr_series(bars: &[PriceBar], period: usize) -> Vec<Option<f64>> {
    math::rolling_mean(&true_range_series(bars), period)
}

/// Latest ATR of a price series.
pub fn calculate_atr(series: &PriceSeries, period: usize) -> Option<AtrIndicator> {
    let values = atr_series(series.bars(), period);
    math::last_defined(&values).map(|value| AtrIndicator { value, period })
}
