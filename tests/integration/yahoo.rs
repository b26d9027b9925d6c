//! Integration tests for the Yahoo chart client

use std::time::Duration;
use straznik::error::MarketDataError;
use straznik::services::market_data::{Lookback, MarketDataProvider};
use straznik::services::yahoo::YahooFinanceProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::chart_body;

fn provider(server: &MockServer, retries: usize) -> YahooFinanceProvider {
    YahooFinanceProvider::new(&server.uri(), Duration::from_secs(5))
        .unwrap()
        .with_max_retries(retries)
}

#[tokio::test]
async fn test_fetches_daily_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GC=F"))
        .and(query_param("range", "6mo"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&[2050.0, 2061.5, 2043.2])))
        .expect(1)
        .mount(&server)
        .await;

    let series = provider(&server, 0)
        .get_history("GC=F", &Lookback::default())
        .await
        .unwrap();

    assert_eq!(series.symbol(), "GC=F");
    assert_eq!(series.closes(), vec![2050.0, 2061.5, 2043.2]);
    assert_eq!(
        series.last().unwrap().date,
        chrono::NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
    );
}

#[tokio::test]
async fn test_unknown_symbol_is_a_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server, 2)
        .get_history("NOPE", &Lookback::default())
        .await
        .unwrap_err();

    match err {
        MarketDataError::Provider { symbol, message } => {
            assert_eq!(symbol, "NOPE");
            assert!(message.contains("Not Found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server, 0)
        .get_history("CL=F", &Lookback::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MarketDataError::Status { status: 503, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&[1.0, 2.0])))
        .mount(&server)
        .await;

    let series = provider(&server, 1)
        .get_history("SI=F", &Lookback::default())
        .await
        .unwrap();

    assert_eq!(series.len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>consent</html>"))
        .mount(&server)
        .await;

    let err = provider(&server, 2)
        .get_history("^FTSE", &Lookback::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MarketDataError::Decode { .. }));
    assert!(!err.is_transient());
}
