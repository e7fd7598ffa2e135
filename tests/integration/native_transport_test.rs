//! Tests for the reqwest transport against a local mock server.

use api_tester::composer::RequestDraft;
use api_tester::config::ApiTesterConfig;
use api_tester::executor::execute;
use api_tester::models::{BodyType, ErrorType, HttpMethod, KeyValue, RequestDescription};
use api_tester::transport::ReqwestTransport;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(&ApiTesterConfig::default()).unwrap()
}

#[tokio::test]
async fn test_get_parses_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "abc")
                .set_body_json(json!({"id": 1, "name": "Alice"})),
        )
        .mount(&server)
        .await;

    let request = RequestDescription::new(HttpMethod::GET, format!("{}/users/1", server.uri()));
    let result = execute(&request, &transport()).await;

    assert_eq!(result.status, 200);
    assert_eq!(result.status_text, "OK");
    assert_eq!(result.error_type, ErrorType::None);
    assert!(result.error_message.is_none());
    assert_eq!(result.body, json!({"id": 1, "name": "Alice"}));
    assert_eq!(result.headers.get("x-request-id").map(String::as_str), Some("abc"));
}

#[tokio::test]
async fn test_plain_text_body_kept_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let request = RequestDescription::new(HttpMethod::GET, server.uri());
    let result = execute(&request, &transport()).await;

    assert_eq!(result.body, json!("pong"));
}

#[tokio::test]
async fn test_not_found_is_client_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such item"})))
        .mount(&server)
        .await;

    let request = RequestDescription::new(HttpMethod::GET, format!("{}/missing", server.uri()));
    let result = execute(&request, &transport()).await;

    assert_eq!(result.status, 404);
    assert_eq!(result.status_text, "Not Found");
    assert_eq!(result.error_type, ErrorType::Http4xx);
    assert_eq!(
        result.error_message.as_deref(),
        Some("Client Error 404: Not Found")
    );
    assert_eq!(result.body, json!({"error": "no such item"}));
}

#[tokio::test]
async fn test_service_unavailable_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&server)
        .await;

    let request = RequestDescription::new(HttpMethod::GET, server.uri());
    let result = execute(&request, &transport()).await;

    assert_eq!(result.status, 503);
    assert_eq!(result.error_type, ErrorType::Http5xx);
    assert_eq!(
        result.error_message.as_deref(),
        Some("Server Error 503: Service Unavailable")
    );
    assert_eq!(result.body, json!("down for maintenance"));
}

#[tokio::test]
async fn test_json_post_sends_headers_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("authorization", "Bearer abc"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Alice"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = RequestDraft::new();
    draft.url = format!("{}/users", server.uri());
    draft.method = HttpMethod::POST;
    draft.headers = vec![KeyValue::new("Authorization", "Bearer abc")];
    draft.body_type = BodyType::Json;
    draft.json_body = r#"{"name": "Alice"}"#.to_string();

    let result = execute(&draft.to_description().unwrap(), &transport()).await;

    assert_eq!(result.status, 201);
    assert_eq!(result.error_type, ErrorType::None);
    assert_eq!(result.body, json!({"id": 7}));
}

#[tokio::test]
async fn test_form_data_sent_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"title\""))
        .and(body_string_contains("report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestDescription::new(HttpMethod::POST, format!("{}/upload", server.uri()))
        .with_form_fields(vec![
            KeyValue::new("title", "report"),
            KeyValue::disabled("secret", "hidden"),
        ]);
    let result = execute(&request, &transport()).await;

    assert_eq!(result.error_type, ErrorType::None);
    assert_eq!(result.body, json!("stored"));

    let received = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&received[0].body);
    assert!(!body.contains("hidden"));
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Port 9 (discard) is not expected to be listening.
    let request = RequestDescription::new(HttpMethod::GET, "http://127.0.0.1:9/");
    let result = execute(&request, &transport()).await;

    assert_eq!(result.status, 0);
    assert_eq!(result.status_text, "Unknown Error");
    assert_eq!(result.error_type, ErrorType::Network);
    assert!(result.error_message.unwrap().starts_with("Network Error"));
}

#[tokio::test]
async fn test_refused_connection_class_ignores_url() {
    let transport = transport();

    for segment in ["items", "cors-settings", "unknown"] {
        let request = RequestDescription::new(HttpMethod::GET, format!("http://127.0.0.1:9/{}", segment));
        let result = execute(&request, &transport).await;

        assert_eq!(result.error_type, ErrorType::Network, "path /{}", segment);
        let body = result.body_text();
        assert!(!body.contains(segment), "message leaked the URL: {}", body);
    }
}
