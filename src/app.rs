/*
 * Responsibility
 * - Config load → state → Router assembly
 * - Middleware application (CORS / HTTP plumbing)
 * - axum::serve() startup
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, error::AppError, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,webapp_backend=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice immediately.
        // In production, prefer the default behavior and let the server keep running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    let state = AppState::new();

    tracing::info!(
        title = state.meta.title,
        version = state.meta.version,
        env = ?config.app_env,
        addr = %config.addr,
        "starting service"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the complete application, middleware included.
///
/// Public so integration tests can drive the exact router the binary serves.
pub fn build_router(state: AppState) -> Router {
    async fn not_found() -> AppError {
        AppError::not_found("route")
    }

    async fn method_not_allowed() -> AppError {
        AppError::MethodNotAllowed
    }

    let router = Router::new()
        .merge(api::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    let router = middleware::cors::apply(router);
    middleware::http::apply(router)
}
