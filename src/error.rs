//! Error types for the scanner's external boundaries.
//!
//! Indicator warm-up is not an error: insufficient history surfaces as `None`
//! in the indicator series and the symbol is skipped silently.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to build a price series from provider data.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("bar {index} dated {date} does not follow the previous bar")]
    NonIncreasingDates { index: usize, date: NaiveDate },
}

/// Any failure while retrieving price history. The scanner treats every
/// variant the same way: no data for this symbol this run.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status} for {symbol}")]
    Status { symbol: String, status: u16 },

    #[error("provider error for {symbol}: {message}")]
    Provider { symbol: String, message: String },

    #[error("no price history returned for {0}")]
    Empty(String),

    #[error("failed to decode response for {symbol}: {message}")]
    Decode { symbol: String, message: String },

    #[error("invalid provider url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl MarketDataError {
    /// Whether retrying the request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            MarketDataError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Delivery failure at the notification endpoint. Logged and swallowed.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse watchlist: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("invalid cron expression '{expression}': {message}")]
    Schedule { expression: String, message: String },
}
