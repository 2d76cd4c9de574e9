use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::app::AppState;
use crate::infrastructure::config::AppConfig;

use super::build_router;

fn test_router() -> Router {
    build_router(Arc::new(AppState::new(AppConfig::default())))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };

    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request");

    send(test_router(), request).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build POST request");

    send(test_router(), request).await
}

#[tokio::test]
async fn welcome_returns_metadata() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participant"], "Deepak");
    assert_eq!(body["environment"], "development");
    assert!(body["message"].as_str().expect("message").contains("Welcome"));
    assert_eq!(body["endpoints"]["/checksum"], "POST - Generate checksum from text");
}

#[tokio::test]
async fn welcome_uses_configured_participant() {
    let config = AppConfig {
        participant_name: "Ada".to_string(),
        environment: "production".to_string(),
        ..AppConfig::default()
    };
    let router = build_router(Arc::new(AppState::new(config)));
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("build request");

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participant"], "Ada");
    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn generate_tokenizes_query_text() {
    let (status, body) = get("/generate?text=Hello%20World").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": ["Hello", "World"], "count": 2}));
}

#[tokio::test]
async fn generate_accepts_form_encoded_spaces() {
    let (status, body) = get("/generate?text=FastAPI+is+awesome").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"], json!(["FastAPI", "is", "awesome"]));
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn generate_rejects_empty_text() {
    let (status, body) = get("/generate?text=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Text parameter cannot be empty");
}

#[tokio::test]
async fn generate_rejects_whitespace_only_text() {
    let (status, _) = get("/generate?text=%20%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_rejects_missing_text() {
    let (status, body) = get("/generate").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("detail").is_some());
}

#[tokio::test]
async fn generate_uses_last_repeated_text_value() {
    let (status, body) = get("/generate?text=a&text=b%20c").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": ["b", "c"], "count": 2}));
}

#[tokio::test]
async fn generate_ignores_unrelated_query_keys() {
    let (status, body) = get("/generate?lang=en&text=Hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": ["Hello"], "count": 1}));
}

#[tokio::test]
async fn tokenize_returns_tokens_and_count() {
    let (status, body) = post_json("/tokenize", json!({"text": "This is a FastAPI test"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokens"], json!(["This", "is", "a", "FastAPI", "test"]));
    assert_eq!(body["count"], 5);
}

#[tokio::test]
async fn tokenize_collapses_extra_whitespace() {
    let (status, body) = post_json("/tokenize", json!({"text": "Hello    World\t\nTest"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tokens": ["Hello", "World", "Test"], "count": 3}));
}

#[tokio::test]
async fn tokenize_rejects_empty_text_at_schema_stage() {
    let (status, body) = post_json("/tokenize", json!({"text": ""})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let issues = body["detail"].as_array().expect("structured detail");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["loc"], json!(["body"]));
    assert_eq!(issues[0]["type"], "value_error");
}

#[tokio::test]
async fn tokenize_rejects_whitespace_only_text() {
    let (status, body) = post_json("/tokenize", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Text cannot be empty");
}

#[tokio::test]
async fn tokenize_rejects_missing_text_field() {
    let (status, _) = post_json("/tokenize", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post_json("/tokenize", json!({"invalid_field": "test"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn tokenize_rejects_malformed_json() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tokenize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"text\": "))
        .expect("build request");

    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn json_body_without_content_type_is_parsed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/checksum")
        .body(Body::from(json!({"text": "Hello World"}).to_string()))
        .expect("build request");

    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checksum"], "b10a8db164e0754105b7a99be72e3fe5");
}

#[tokio::test]
async fn tokenize_without_content_type_still_validates_schema() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tokenize")
        .body(Body::from(json!({"text": ""}).to_string()))
        .expect("build request");

    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "value_error");
}

#[tokio::test]
async fn tokenize_rejects_non_json_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tokenize")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(json!({"text": "Hello"}).to_string()))
        .expect("build request");

    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "content_type");
}

#[tokio::test]
async fn checksum_returns_md5_of_text() {
    let (status, body) = post_json("/checksum", json!({"text": "Hello World"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "checksum": "b10a8db164e0754105b7a99be72e3fe5",
            "original_text": "Hello World",
        })
    );
}

#[tokio::test]
async fn checksum_is_consistent_across_requests() {
    let (_, first) = post_json("/checksum", json!({"text": "FastAPI is great"})).await;
    let (_, second) = post_json("/checksum", json!({"text": "FastAPI is great"})).await;

    assert_eq!(first["checksum"], second["checksum"]);
}

#[tokio::test]
async fn checksum_differs_for_different_texts() {
    let (first_status, first) = post_json("/checksum", json!({"text": "Hello"})).await;
    let (second_status, second) = post_json("/checksum", json!({"text": "World"})).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_ne!(first["checksum"], second["checksum"]);
}

#[tokio::test]
async fn checksum_rejects_empty_text() {
    let (status, _) = post_json("/checksum", json!({"text": ""})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn checksum_accepts_whitespace_only_text() {
    let (status, body) = post_json("/checksum", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_text"], "   ");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = get("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Token Generation API");
    assert_eq!(body["info"]["version"], "1.0.0");
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let (status, body) = get("/docs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn wrong_method_returns_json_detail() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/generate")
        .body(Body::empty())
        .expect("build request");
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"detail": "Method Not Allowed"}));

    let (status, body) = get("/tokenize").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], "Method Not Allowed");
}

#[tokio::test]
async fn tokenize_and_checksum_agree_on_same_text() {
    let text = "Integration test scenario";

    let (tokenize_status, tokens) = post_json("/tokenize", json!({"text": text})).await;
    let (checksum_status, checksum) = post_json("/checksum", json!({"text": text})).await;

    assert_eq!(tokenize_status, StatusCode::OK);
    assert_eq!(checksum_status, StatusCode::OK);
    assert_eq!(tokens["count"], 3);
    assert_eq!(checksum["original_text"], text);
}
