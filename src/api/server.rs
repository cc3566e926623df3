//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{
    handlers,
    models::{ErrorResponse, FeedParams, SearchParams},
};
use crate::error::Error;
use crate::service::KidsService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<KidsService>,
}

/// Configure and start the HTTP server
pub async fn start_http_server(
    service: Arc<KidsService>,
    bind_address: &str,
    port: u16,
) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    let app_state = AppState { service };

    // Configure CORS to allow browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/kids/search", get(search_handler))
        .route("/kids/videos", get(videos_handler))
        .route("/trending", get(trending_handler))
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind_address, port)).await?;
    info!("🌐 API server listening on http://{}:{}", bind_address, port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Map a service error to the client-facing status code
///
/// Caller input problems are the caller's fault; everything else that leaks
/// this far is an upstream failure.
fn error_status(error: &Error) -> StatusCode {
    match error {
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::UpstreamStatus { .. } | Error::Http(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: &Error) -> axum::response::Response {
    (
        error_status(error),
        Json(ErrorResponse::new(error.to_string())),
    )
        .into_response()
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    match handlers::health_check().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Kids search handler
async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match handlers::search(&state.service, params.q.as_deref(), params.filter.as_deref()).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Kids home feed handler
async fn videos_handler(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> impl IntoResponse {
    match handlers::videos(&state.service, params.region.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Trending handler, rewired to the kids feed
async fn trending_handler(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> impl IntoResponse {
    match handlers::trending(&state.service, params.region.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            error_status(&Error::invalid_request("query is a required parameter")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&Error::UpstreamStatus { status: 500 }),
            StatusCode::BAD_GATEWAY
        );
    }
}
