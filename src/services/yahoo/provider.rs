//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::messages::ChartResponse;
use crate::error::MarketDataError;
use crate::models::market::PriceSeries;
use crate::services::market_data::{Lookback, MarketDataProvider};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; straznik/0.1)";

pub struct YahooFinanceProvider {
    client: Client,
    base_url: Url,
    max_retries: usize,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, MarketDataError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            max_retries: 2,
        })
    }

    /// Number of extra attempts after a transient failure.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn chart_url(&self, symbol: &str, lookback: &Lookback) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MarketDataError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("range", &lookback.range)
            .append_pair("interval", &lookback.interval)
            .append_pair("includePrePost", "false");
        Ok(url)
    }

    async fn fetch_once(
        &self,
        symbol: &str,
        lookback: &Lookback,
    ) -> Result<PriceSeries, MarketDataError> {
        let url = self.chart_url(symbol, lookback)?;
        debug!(symbol = %symbol, url = %url, "requesting chart");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Unknown symbols come back as 404 with a chart.error payload
        let parsed = serde_json::from_str::<ChartResponse>(&body);
        match parsed {
            Ok(chart) if status.is_success() || chart.chart.error.is_some() => {
                chart.into_series(symbol)
            }
            Ok(_) => Err(MarketDataError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            }),
            Err(_) if !status.is_success() => Err(MarketDataError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            }),
            Err(e) => Err(MarketDataError::Decode {
                symbol: symbol.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn get_history(
        &self,
        symbol: &str,
        lookback: &Lookback,
    ) -> Result<PriceSeries, MarketDataError> {
        let fetch = || self.fetch_once(symbol, lookback);
        let series = fetch
            .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
            .when(MarketDataError::is_transient)
            .notify(|err: &MarketDataError, delay: Duration| {
                warn!(symbol = %symbol, error = %err, "chart request failed, retrying in {:?}", delay);
            })
            .await?;

        debug!(symbol = %symbol, bars = series.len(), "fetched price history");
        Ok(series)
    }
}
