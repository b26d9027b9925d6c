//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod position;
pub mod signal;
pub mod strategy;

pub use indicators::{
    AtrIndicator, DonchianChannel, EmaIndicator, IndicatorSnapshot, MeanReversionSnapshot,
    RsiIndicator, TrendSnapshot,
};
pub use market::{PriceBar, PriceSeries};
pub use position::PositionStatus;
pub use signal::{AlertKind, AlertRecord};
pub use strategy::{
    MeanReversionParams, StrategyKind, StrategyParams, TrendFollowingParams, WatchEntry,
};
