//! Wire format of the v8 chart endpoint.

use chrono::DateTime;
use serde::Deserialize;

use crate::error::MarketDataError;
use crate::models::market::{PriceBar, PriceSeries};

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub gmtoffset: Option<i64>,
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented OHLCV. Holidays and halted sessions show up as nulls.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

fn at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten().filter(|v| v.is_finite())
}

impl ChartResponse {
    /// Convert the response into a price series, dropping incomplete rows.
    /// Session dates are taken in the exchange's local time.
    pub fn into_series(self, symbol: &str) -> Result<PriceSeries, MarketDataError> {
        if let Some(err) = self.chart.error {
            return Err(MarketDataError::Provider {
                symbol: symbol.to_string(),
                message: format!("{}: {}", err.code, err.description),
            });
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::Empty(symbol.to_string()))?;

        let offset = result.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let (Some(open), Some(high), Some(low), Some(close)) = (
                at(&quote.open, i),
                at(&quote.high, i),
                at(&quote.low, i),
                at(&quote.close, i),
            ) else {
                continue;
            };
            let Some(stamp) = DateTime::from_timestamp(ts + offset, 0) else {
                continue;
            };
            let volume = at(&quote.volume, i).unwrap_or(0.0);
            bars.push(PriceBar::new(stamp.date_naive(), open, high, low, close, volume));
        }

        if bars.is_empty() {
            return Err(MarketDataError::Empty(symbol.to_string()));
        }
        Ok(PriceSeries::from_unordered(symbol, bars))
    }
}
