//! HTTP API surface
//!
//! Thin axum layer over [`KidsService`](crate::service::KidsService):
//! routing and status-code mapping live here, the content logic does not.

pub mod handlers;
pub mod models;
pub mod server;

pub use server::start_http_server;
