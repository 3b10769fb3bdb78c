/*
 * Responsibility
 * - Public interface of the middleware modules
 */
pub mod cors;
pub mod http;
