//! API request handlers

use anyhow::Result;
use serde_json::Value;

use crate::error::Result as ServiceResult;
use crate::models::{ContentItem, SearchResultPage};
use crate::service::KidsService;

/// Handle health check requests
pub async fn health_check() -> Result<Value> {
    Ok(serde_json::json!({
        "status": "healthy",
        "service": "kids-video-aggregator",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle kids search requests
pub async fn search(
    service: &KidsService,
    query: Option<&str>,
    filter: Option<&str>,
) -> ServiceResult<SearchResultPage> {
    service.search(query.unwrap_or_default(), filter).await
}

/// Handle kids home feed requests
pub async fn videos(
    service: &KidsService,
    region: Option<&str>,
) -> ServiceResult<Vec<ContentItem>> {
    service.videos(region).await
}

/// Handle trending requests (rewired to kid-friendly content)
pub async fn trending(
    service: &KidsService,
    region: Option<&str>,
) -> ServiceResult<Vec<ContentItem>> {
    service.trending(region).await
}
