//! CORS policy for browser clients.
//!
//! Note:
//! - CORS is enforced by browsers. Native mobile apps and server-to-server calls are not
//!   restricted by CORS.
//! - This middleware should be applied at the Router level (not inside handlers).
//!
//! Responsibility:
//! - Answer preflight requests (OPTIONS + Access-Control-Request-Method) on any path.
//! - Inject `Access-Control-Allow-*` headers on every other response.
//!
//! Policy (fixed, configuration-free):
//! - Allow-Origin: `*`, Allow-Credentials: `true`, Allow-Methods: `*`, Allow-Headers: `*`.
//!
//! `tower_http::cors::CorsLayer` refuses a wildcard origin combined with
//! `allow_credentials(true)`, so the headers are set by hand here.

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::{Next, from_fn};
use axum::response::{IntoResponse, Response};

const WILDCARD: HeaderValue = HeaderValue::from_static("*");
const MAX_AGE: HeaderValue = HeaderValue::from_static("600");

/// Apply the permissive CORS policy to the given Router.
pub fn apply(router: Router) -> Router {
    router.layer(from_fn(permissive_cors))
}

async fn permissive_cors(req: Request, next: Next) -> Response {
    if is_preflight(&req) {
        return preflight_response();
    }

    let mut res = next.run(req).await;
    insert_simple_headers(res.headers_mut());
    res
}

/// A browser preflight is OPTIONS plus Access-Control-Request-Method.
/// Plain OPTIONS requests fall through to the router.
fn is_preflight(req: &Request) -> bool {
    req.method() == Method::OPTIONS
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn preflight_response() -> Response {
    let mut res = StatusCode::OK.into_response();
    let headers = res.headers_mut();
    insert_simple_headers(headers);
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, WILDCARD);
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, WILDCARD);
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, MAX_AGE);
    res
}

fn insert_simple_headers(headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}
