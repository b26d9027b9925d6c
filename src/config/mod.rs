//! Runtime configuration from the environment (optionally seeded by `.env`).

pub mod watchlist;

pub use watchlist::Watchlist;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::services::market_data::Lookback;
use crate::services::notifier::DEFAULT_TELEGRAM_API_URL;
use crate::services::yahoo::provider::DEFAULT_BASE_URL;

/// Weekdays after the US cash close.
pub const DEFAULT_SCHEDULE: &str = "0 30 22 * * Mon-Fri";

/// Deployment environment name (`production`, `sandbox`, ...).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramSettings {
    pub api_url: String,
    pub token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` when the token or chat id is missing; delivery is then skipped.
    pub telegram: Option<TelegramSettings>,
    pub yahoo_base_url: String,
    pub lookback: Lookback,
    pub fetch_retries: usize,
    pub http_timeout: Duration,
    pub schedule: String,
    pub watchlist_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let telegram = match (get("TELEGRAM_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(token), Some(chat_id)) => Some(TelegramSettings {
                api_url: get("TELEGRAM_API_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
                token,
                chat_id,
            }),
            _ => None,
        };

        let lookback = Lookback::new(
            get("LOOKBACK_RANGE").unwrap_or_else(|| Lookback::default().range),
            get("LOOKBACK_INTERVAL").unwrap_or_else(|| Lookback::default().interval),
        );

        Ok(Self {
            telegram,
            yahoo_base_url: get("YAHOO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            lookback,
            fetch_retries: parse_or("FETCH_RETRIES", get("FETCH_RETRIES"), 2)?,
            http_timeout: Duration::from_secs(parse_or(
                "HTTP_TIMEOUT_SECONDS",
                get("HTTP_TIMEOUT_SECONDS"),
                30,
            )?),
            schedule: get("SCAN_SCHEDULE").unwrap_or_else(|| DEFAULT_SCHEDULE.to_string()),
            watchlist_path: get("WATCHLIST_PATH").map(PathBuf::from),
        })
    }

    /// Watchlist from `WATCHLIST_PATH`, or the built-in one.
    pub fn load_watchlist(&self) -> Result<Watchlist, ConfigError> {
        match &self.watchlist_path {
            Some(path) => Watchlist::load(path),
            None => Ok(Watchlist::builtin()),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(default),
    }
}
