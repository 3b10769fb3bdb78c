/*
 * Responsibility
 * - GET / (welcome message built from the service metadata)
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": format!("Welcome to {}", state.meta.title) })),
    )
}
