#![allow(dead_code, unused_imports)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Send a bodyless request and collect status, headers and raw body.
pub async fn send(app: &Router, method: Method, path: &str) -> (u16, HeaderMap, Vec<u8>) {
    send_with_headers(app, method, path, &[]).await
}

/// Same as `send`, with extra request headers (name, value pairs).
pub async fn send_with_headers(
    app: &Router,
    method: Method,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

/// Helper for plain GET requests: status + raw body.
pub async fn get_raw(app: &Router, path: &str) -> (u16, Vec<u8>) {
    let (status, _, body) = send(app, Method::GET, path).await;
    (status, body)
}
