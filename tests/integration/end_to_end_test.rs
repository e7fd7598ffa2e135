//! End-to-end tests for the compose → execute → history workflow.
//!
//! These tests drive the full pipeline with a replaying transport, so no
//! network access is needed.

use super::ReplayTransport;
use api_tester::builder::RequestBody;
use api_tester::composer::RequestDraft;
use api_tester::executor::execute;
use api_tester::history::{load_log, save_log, HistoryLog};
use api_tester::models::{BodyType, ErrorType, HttpMethod, KeyValue};
use api_tester::transport::{TransportFailure, TransportOutcome, TransportSuccess};
use serde_json::{json, Value};
use tempfile::TempDir;

fn ok(raw_body: &str) -> TransportOutcome {
    TransportSuccess {
        status: 200,
        status_text: "OK".to_string(),
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        raw_body: raw_body.to_string(),
    }
    .into()
}

fn draft(url: &str) -> RequestDraft {
    let mut draft = RequestDraft::new();
    draft.url = url.to_string();
    draft
}

#[tokio::test]
async fn test_json_post_round_trip() {
    let transport = ReplayTransport::new([ok(r#"{"id": 1, "name": "Alice"}"#)]);

    let mut draft = draft("https://api.example.com/users");
    draft.method = HttpMethod::POST;
    draft.body_type = BodyType::Json;
    draft.json_body = r#"{"name": "Alice"}"#.to_string();
    draft.headers = vec![
        KeyValue::new("Authorization", "Bearer abc"),
        KeyValue::disabled("X-Debug", "true"),
    ];

    let request = draft.to_description().unwrap();
    let result = execute(&request, &transport).await;

    assert_eq!(result.error_type, ErrorType::None);
    assert_eq!(result.body, json!({"id": 1, "name": "Alice"}));
    assert_eq!(result.content_type(), Some("application/json"));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::POST);
    assert_eq!(sent[0].header("Authorization"), Some("Bearer abc"));
    assert_eq!(sent[0].header("X-Debug"), None);
    assert_eq!(sent[0].content_type(), Some("application/json"));
    assert_eq!(
        sent[0].body,
        RequestBody::Text(r#"{"name": "Alice"}"#.to_string())
    );
}

#[tokio::test]
async fn test_form_submission_sends_filtered_fields() {
    let transport = ReplayTransport::new([ok("accepted")]);

    let mut draft = draft("https://api.example.com/upload");
    draft.method = HttpMethod::POST;
    draft.body_type = BodyType::FormData;
    draft.form_fields = vec![
        KeyValue::new("title", "report"),
        KeyValue::new("notes", ""),
        KeyValue::disabled("draft", "yes"),
        KeyValue::blank(),
    ];

    let result = execute(&draft.to_description().unwrap(), &transport).await;
    assert_eq!(result.body, Value::String("accepted".to_string()));

    let sent = transport.sent();
    assert_eq!(
        sent[0].body,
        RequestBody::Form(vec![
            ("title".to_string(), "report".to_string()),
            ("notes".to_string(), String::new()),
        ])
    );
    assert_eq!(sent[0].content_type(), None);
}

#[tokio::test]
async fn test_failure_scenarios() {
    let transport = ReplayTransport::new([
        TransportFailure::unreachable("net::ERR_FAILED due to CORS policy").into(),
        TransportFailure::unreachable("connection refused").into(),
        TransportFailure::status(404, "Not Found")
            .with_message("Http failure response for https://api.example.com/x: 404 Not Found")
            .into(),
        TransportFailure::status(503, "Service Unavailable")
            .with_message("gateway timeout")
            .into(),
    ]);

    let request = draft("https://api.example.com/x").to_description().unwrap();

    let cors = execute(&request, &transport).await;
    assert_eq!(cors.error_type, ErrorType::Cors);
    assert_eq!(cors.status, 0);

    let network = execute(&request, &transport).await;
    assert_eq!(network.error_type, ErrorType::Network);

    let not_found = execute(&request, &transport).await;
    assert_eq!(not_found.error_type, ErrorType::Http4xx);
    assert_eq!(
        not_found.error_message.as_deref(),
        Some("Client Error 404: Not Found")
    );

    let unavailable = execute(&request, &transport).await;
    assert_eq!(unavailable.error_type, ErrorType::Http5xx);
}

#[tokio::test]
async fn test_history_replay_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.jsonl");

    let transport = ReplayTransport::new((0..12).map(|n| ok(&format!(r#"{{"n": {}}}"#, n))));
    let mut history = HistoryLog::with_limit(10);

    for n in 0..12 {
        let mut draft = draft(&format!("https://api.example.com/items/{}", n));
        if n % 2 == 0 {
            draft.body_type = BodyType::Json;
            draft.json_body = format!(r#"{{"n": {}}}"#, n);
        }
        let request = draft.to_description().unwrap();
        let result = execute(&request, &transport).await;
        history.record(request, Some(result));
    }

    assert_eq!(history.len(), 10);
    let newest = history.latest().unwrap();
    assert_eq!(newest.request.url, "https://api.example.com/items/11");
    assert_eq!(newest.response.as_ref().unwrap().body, json!({"n": 11}));

    save_log(&path, &history).unwrap();
    let restored = load_log(&path, 10).unwrap();
    assert_eq!(restored, history);

    // Reload an older JSON request into a fresh editor.
    let older = restored
        .entries()
        .find(|entry| entry.request.url.ends_with("/items/4"))
        .unwrap();
    let mut editor = RequestDraft::new();
    let response = editor.load_entry(older).unwrap();

    assert_eq!(editor.body_type, BodyType::Json);
    assert_eq!(editor.json_body, r#"{"n": 4}"#);
    assert_eq!(response.body, json!({"n": 4}));
}

#[tokio::test]
async fn test_body_type_none_drops_stale_bodies() {
    let transport = ReplayTransport::new([ok("")]);

    let mut draft = draft("https://api.example.com/ping");
    draft.json_body = r#"{"stale": true}"#.to_string();
    draft.form_fields = vec![KeyValue::new("stale", "true")];

    let request = draft.to_description().unwrap();
    execute(&request, &transport).await;

    let sent = transport.sent();
    assert!(sent[0].body.is_empty());
    assert!(sent[0].headers.is_empty());
}
