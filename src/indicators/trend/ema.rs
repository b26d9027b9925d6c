//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::EmaIndicator;
use crate::models::market::PriceSeries;

/// EMA with alpha = 2 / (span + 1), seeded from the first value and without
/// bias correction. Every slot is defined once the series starts.
pub fn ema_series(values: &[f64], span: usize) -> Vec<Option<f64>> {
    if span == 0 {
        return vec![None; values.len()];
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => alpha * value + (1.0 - alpha) * p,
            None => value,
        };
        prev = Some(next);
        out.push(Some(next));
    }
    out
}

/// EMA of closes for a specific span
pub fn calculate_ema(series: &PriceSeries, span: usize) -> Option<EmaIndicator> {
    let values = ema_series(&series.closes(), span);
    math::last_defined(&values).map(|value| EmaIndicator { value, span })
}
