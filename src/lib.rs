/// Kids Video Aggregator - Rust Implementation
///
/// Content-aggregation adapter for a kid-friendly video surface. Queries the
/// platform's internal JSON APIs, extracts video listings via search, home
/// feed, and curated-channel fallback, and normalizes everything into a
/// uniform content-item representation.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod service;
pub mod upstream;

#[cfg(feature = "api")]
pub mod api;

// Re-export main types for easy access
pub use crate::aggregator::{CuratedAggregator, SourceFetcher};
pub use crate::config::{AggregationPolicy, Config, ServerConfig, SourcesConfig, UpstreamConfig};
pub use crate::error::{Error, Result};
pub use crate::extract::{DecodeError, RENDERER_KEY};
pub use crate::models::{ContentItem, SearchResultPage, StreamItem};
pub use crate::service::KidsService;
pub use crate::upstream::{KidsApiClient, KIDS_HOME_BROWSE_ID, MAX_QUERY_LENGTH};
