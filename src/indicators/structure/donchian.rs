//! Donchian channel (rolling high/low) indicator

use crate::common::math;
use crate::models::indicators::DonchianChannel;
use crate::models::market::PriceSeries;

/// Rolling highest high and lowest low over `period` bars.
///
/// With `shift = 1` the window ends on the previous bar, so a breakout test
/// against the channel never compares the evaluated bar with itself.
pub fn donchian_series(
    highs: &[f64],
    lows: &[f64],
    period: usize,
    shift: usize,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let upper = math::rolling_max(highs, period, shift);
    let lower = math::rolling_min(lows, period, shift);
    (upper, lower)
}

/// Latest channel of a price series.
pub fn calculate_donchian(
    series: &PriceSeries,
    period: usize,
    shift: usize,
) -> Option<DonchianChannel> {
    let (upper, lower) = donchian_series(&series.highs(), &series.lows(), period, shift);
    Some(DonchianChannel {
        upper: math::last_defined(&upper)?,
        lower: math::last_defined(&lower)?,
        period,
    })
}
