//! Market data provider interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MarketDataError;
use crate::models::market::PriceSeries;

/// How much history to request: a calendar span and a bar interval, in the
/// provider's own notation (`6mo`, `1y`, `1d`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookback {
    pub range: String,
    pub interval: String,
}

impl Lookback {
    pub fn new(range: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            interval: interval.into(),
        }
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::new("6mo", "1d")
    }
}

#[async_trait]
pub trait MarketDataProvider {
    /// Fetch a fresh price history for a symbol. An empty history is an error.
    async fn get_history(
        &self,
        symbol: &str,
        lookback: &Lookback,
    ) -> Result<PriceSeries, MarketDataError>;
}
