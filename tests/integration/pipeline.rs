//! Settings-to-delivery run against mocked Yahoo and Telegram

use std::collections::HashMap;
use straznik::config::Settings;
use straznik::core::build_scanner;
use straznik::models::signal::AlertKind;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{chart_body, falling};

#[tokio::test]
async fn test_builtin_watchlist_scan_is_delivered_once() {
    let yahoo = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v8/finance/chart/.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(&falling(80))))
        .mount(&yahoo)
        .await;

    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTOKEN/sendMessage"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&telegram)
        .await;

    let vars: HashMap<&str, String> = HashMap::from([
        ("YAHOO_BASE_URL", yahoo.uri()),
        ("TELEGRAM_API_URL", telegram.uri()),
        ("TELEGRAM_TOKEN", "TOKEN".to_string()),
        ("TELEGRAM_CHAT_ID", "42".to_string()),
        ("FETCH_RETRIES", "0".to_string()),
    ]);
    let settings = Settings::from_lookup(|key| vars.get(key).cloned()).unwrap();
    let scanner = build_scanner(&settings).unwrap();

    let outcome = scanner.run_once().await;

    assert!(outcome.delivered);
    assert!(outcome.unavailable.is_empty());
    assert_eq!(outcome.alerts.len(), scanner.watchlist().entries.len());

    // Every flat instrument is oversold; the short one is told to cover.
    let stoxx = outcome
        .alerts
        .iter()
        .find(|a| a.symbol == "^STOXX50E")
        .unwrap();
    assert_eq!(stoxx.kind, AlertKind::ExitShort);

    let requests = telegram.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["text"].as_str().unwrap().starts_with("🔔 *MARKET ALERT*"));
}
