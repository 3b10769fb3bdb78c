/*
 * Responsibility
 * - URL structure of the service
 * - "/" and "/health" only; both read-only GET routes
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{health::health, root::root};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
