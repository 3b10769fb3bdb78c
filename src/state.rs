/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Carries the static service metadata; nothing mutable lives here
 * - Clone is cheap (everything inside is 'static)
 */

/// Descriptive service metadata, surfaced at startup and by `GET /`.
#[derive(Clone, Copy, Debug)]
pub struct ServiceMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl ServiceMeta {
    pub const fn current() -> Self {
        Self {
            title: "FastAPI Application",
            description: "A modern FastAPI application with PostgreSQL",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub meta: ServiceMeta,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            meta: ServiceMeta::current(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
