mod common;

use axum::http::Method;
use common::{send, test_app};
use serde_json::Value;

#[tokio::test]
async fn unknown_path_returns_404() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::GET, "/nonexistent").await;

    assert_eq!(status, 404);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn post_to_root_returns_405() {
    let app = test_app();

    let (status, _, body) = send(&app, Method::POST, "/").await;

    assert_eq!(status, 405);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["code"], "method_not_allowed");
}

#[tokio::test]
async fn delete_on_health_returns_405() {
    let app = test_app();

    let (status, _, _) = send(&app, Method::DELETE, "/health").await;

    assert_eq!(status, 405);
}
