#![allow(dead_code, unused_imports)]

mod request;

pub use request::*;

use axum::Router;
use webapp_backend::app;
use webapp_backend::state::AppState;

/// Build the full production router (middleware included) for in-process tests.
pub fn test_app() -> Router {
    app::build_router(AppState::new())
}
