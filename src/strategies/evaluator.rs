//! Dispatches a watch entry to the evaluator for its strategy.

use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::PriceSeries;
use crate::models::position::PositionStatus;
use crate::models::signal::AlertRecord;
use crate::models::strategy::{StrategyParams, WatchEntry};
use crate::strategies::mean_reversion::MeanReversionEvaluator;
use crate::strategies::trend_following::TrendFollowingEvaluator;

pub struct StrategyEvaluator;

impl StrategyEvaluator {
    /// Indicator state for an entry, or `None` when history is too short.
    pub fn snapshot(entry: &WatchEntry, series: &PriceSeries) -> Option<IndicatorSnapshot> {
        match &entry.params {
            StrategyParams::MeanReversion(params) => {
                MeanReversionEvaluator::snapshot(series, params).map(IndicatorSnapshot::MeanReversion)
            }
            StrategyParams::TrendFollowing(params) => {
                TrendFollowingEvaluator::snapshot(series, params).map(IndicatorSnapshot::TrendFollowing)
            }
        }
    }

    /// Position-aware rules for a snapshot computed by [`Self::snapshot`].
    pub fn decide(
        entry: &WatchEntry,
        snapshot: &IndicatorSnapshot,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        match (&entry.params, snapshot) {
            (StrategyParams::MeanReversion(params), IndicatorSnapshot::MeanReversion(snapshot)) => {
                MeanReversionEvaluator::decide(&entry.symbol, snapshot, params, position)
            }
            (StrategyParams::TrendFollowing(params), IndicatorSnapshot::TrendFollowing(snapshot)) => {
                TrendFollowingEvaluator::decide(&entry.symbol, snapshot, params, position)
            }
            _ => None,
        }
    }

    /// Zero or one alert for the entry given its current position.
    pub fn evaluate(
        entry: &WatchEntry,
        series: &PriceSeries,
        position: PositionStatus,
    ) -> Option<AlertRecord> {
        let snapshot = Self::snapshot(entry, series)?;
        Self::decide(entry, &snapshot, position)
    }
}
