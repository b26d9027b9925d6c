//! Integration tests for Telegram delivery

use std::time::Duration;
use straznik::error::NotifyError;
use straznik::services::notifier::{Notifier, TelegramNotifier};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::new(server.uri(), "123:abc", "-100200", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_posts_markdown_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(serde_json::json!({
            "chat_id": "-100200",
            "text": "🔔 *MARKET ALERT*",
            "parse_mode": "Markdown"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    notifier(&server).send("🔔 *MARKET ALERT*").await.unwrap();
}

#[tokio::test]
async fn test_rejection_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(r#"{"ok":false,"description":"Bad Request: chat not found"}"#),
        )
        .mount(&server)
        .await;

    let err = notifier(&server).send("hello").await.unwrap_err();

    match err {
        NotifyError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("chat not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_hides_bot_token() {
    let notifier = TelegramNotifier::new(
        "http://127.0.0.1:1",
        "SECRET-TOKEN-42",
        "-100200",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = notifier.send("hi").await.unwrap_err();

    assert!(matches!(err, NotifyError::Http(_)));
    assert!(!err.to_string().contains("SECRET-TOKEN-42"), "{err}");
    assert!(!format!("{err:?}").contains("SECRET-TOKEN-42"), "{err:?}");
}
