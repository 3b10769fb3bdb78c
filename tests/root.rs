mod common;

use axum::http::Method;
use common::{get_raw, send, test_app};
use serde_json::{Value, json};

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = test_app();

    let (status, body) = get_raw(&app, "/").await;

    assert_eq!(status, 200);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "message": "Welcome to FastAPI Application" }));
}

#[tokio::test]
async fn root_response_is_json() {
    let app = test_app();

    let (status, headers, _) = send(&app, Method::GET, "/").await;

    assert_eq!(status, 200);
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn root_ignores_query_params() {
    let app = test_app();

    let (status, body) = get_raw(&app, "/?probe=1&x=y").await;

    assert_eq!(status, 200);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "message": "Welcome to FastAPI Application" }));
}

#[tokio::test]
async fn root_is_idempotent() {
    let app = test_app();

    let (_, first) = get_raw(&app, "/").await;
    let (_, second) = get_raw(&app, "/").await;

    assert_eq!(first, second);
}
