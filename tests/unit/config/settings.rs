//! Unit tests for environment settings

use std::collections::HashMap;
use std::time::Duration;
use straznik::config::{Settings, DEFAULT_SCHEDULE};
use straznik::error::ConfigError;

fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_defaults() {
    let s = settings(&[]).unwrap();
    assert!(s.telegram.is_none());
    assert_eq!(s.yahoo_base_url, "https://query1.finance.yahoo.com");
    assert_eq!(s.lookback.range, "6mo");
    assert_eq!(s.lookback.interval, "1d");
    assert_eq!(s.fetch_retries, 2);
    assert_eq!(s.http_timeout, Duration::from_secs(30));
    assert_eq!(s.schedule, DEFAULT_SCHEDULE);
    assert!(s.watchlist_path.is_none());
}

#[test]
fn test_telegram_needs_token_and_chat() {
    assert!(settings(&[("TELEGRAM_TOKEN", "abc")]).unwrap().telegram.is_none());
    assert!(settings(&[("TELEGRAM_TOKEN", "abc"), ("TELEGRAM_CHAT_ID", " ")])
        .unwrap()
        .telegram
        .is_none());

    let telegram = settings(&[("TELEGRAM_TOKEN", "abc"), ("TELEGRAM_CHAT_ID", "42")])
        .unwrap()
        .telegram
        .unwrap();
    assert_eq!(telegram.token, "abc");
    assert_eq!(telegram.chat_id, "42");
    assert_eq!(telegram.api_url, "https://api.telegram.org");
}

#[test]
fn test_overrides() {
    let s = settings(&[
        ("LOOKBACK_RANGE", "1y"),
        ("FETCH_RETRIES", "0"),
        ("HTTP_TIMEOUT_SECONDS", "5"),
        ("SCAN_SCHEDULE", "0 0 * * * *"),
        ("WATCHLIST_PATH", "/etc/straznik/watchlist.json"),
    ])
    .unwrap();
    assert_eq!(s.lookback.range, "1y");
    assert_eq!(s.lookback.interval, "1d");
    assert_eq!(s.fetch_retries, 0);
    assert_eq!(s.http_timeout, Duration::from_secs(5));
    assert_eq!(s.schedule, "0 0 * * * *");
    assert!(s.watchlist_path.is_some());
}

#[test]
fn test_invalid_number_is_rejected() {
    let err = settings(&[("FETCH_RETRIES", "many")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("FETCH_RETRIES")));
}

#[test]
fn test_missing_watchlist_file() {
    let s = settings(&[("WATCHLIST_PATH", "/nonexistent/straznik.json")]).unwrap();
    assert!(matches!(s.load_watchlist(), Err(ConfigError::Io { .. })));
}
