/*
 * Responsibility
 * - GET /health (liveness/readiness probe target)
 * - Must stay constant and dependency-free
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
