//! Strategy evaluators that turn indicator snapshots into alerts.

pub mod evaluator;
pub mod mean_reversion;
pub mod trend_following;

pub use evaluator::StrategyEvaluator;
pub use mean_reversion::MeanReversionEvaluator;
pub use trend_following::{smart_stop_long, smart_stop_short, TrendFollowingEvaluator};
