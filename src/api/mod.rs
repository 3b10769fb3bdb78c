/*
 * Responsibility
 * - Public surface of the api module (re-export of routes())
 */
pub mod handlers;
mod routes;

pub use routes::routes;
