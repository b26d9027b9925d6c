use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use straznik::error::{MarketDataError, NotifyError};
use straznik::models::market::{PriceBar, PriceSeries};
use straznik::services::market_data::{Lookback, MarketDataProvider};
use straznik::services::notifier::Notifier;

/// 2024-01-02 00:00:00 UTC
pub const FIRST_SESSION: i64 = 1_704_153_600;

pub fn series_from_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(start + Duration::days(i as i64), c, c + 0.5, c - 0.5, c, 100.0))
        .collect();
    PriceSeries::new(symbol, bars).unwrap()
}

/// Closes falling one point per session: RSI pinned at 0.
pub fn falling(count: usize) -> Vec<f64> {
    (0..count).map(|i| 200.0 - i as f64).collect()
}

/// Closes rising one point per session: RSI pinned at 100.
pub fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

/// Closes alternating between two levels: RSI near 50.
pub fn choppy(count: usize) -> Vec<f64> {
    (0..count).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect()
}

/// In-memory provider; symbols without a series fail like an unknown ticker.
#[derive(Default)]
pub struct FakeProvider {
    series: HashMap<String, PriceSeries>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn with(mut self, symbol: &str, closes: &[f64]) -> Self {
        self.series
            .insert(symbol.to_string(), series_from_closes(symbol, closes));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    async fn get_history(
        &self,
        symbol: &str,
        _lookback: &Lookback,
    ) -> Result<PriceSeries, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::Empty(symbol.to_string()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected {
            status: 401,
            body: "Unauthorized".to_string(),
        })
    }
}

/// Yahoo v8 chart payload for daily closes starting at [`FIRST_SESSION`].
pub fn chart_body(closes: &[f64]) -> serde_json::Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| FIRST_SESSION + i * 86_400)
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    serde_json::json!({
        "chart": {
            "result": [{
                "meta": { "gmtoffset": 0, "exchangeTimezoneName": "UTC" },
                "timestamp": timestamps,
                "indicators": { "quote": [{
                    "open": closes,
                    "high": highs,
                    "low": lows,
                    "close": closes,
                    "volume": vec![1000; closes.len()]
                }]}
            }],
            "error": null
        }
    })
}
