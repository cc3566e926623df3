//! HTTP client for the kids video API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::aggregator::SourceFetcher;
use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::extract;
use crate::models::StreamItem;

/// Browse id of the kids home feed
pub const KIDS_HOME_BROWSE_ID: &str = "FEkids_home";

/// Longest query the search endpoint accepts
pub const MAX_QUERY_LENGTH: usize = 100;

/// Client for the upstream search and browse endpoints
///
/// One synchronous POST per call, no retries; retry policy belongs to
/// whoever owns the `reqwest::Client` defaults. A non-success status is
/// reported with its code so callers can decide between failing and
/// skipping a source.
#[derive(Clone)]
pub struct KidsApiClient {
    http: Client,
    config: UpstreamConfig,
}

impl KidsApiClient {
    /// Create a new client from upstream configuration
    pub fn new(config: UpstreamConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, config }
    }

    /// Query the search endpoint
    ///
    /// Validates the query before any network call: it must be non-empty
    /// and at most [`MAX_QUERY_LENGTH`] characters.
    pub async fn search(&self, query: &str) -> Result<Value> {
        validate_query(query)?;

        let body = json!({
            "context": {
                "client": {
                    "clientName": self.config.client_name,
                    "clientVersion": self.config.client_version,
                    "hl": self.config.hl,
                    "kidsAppInfo": {
                        "contentSettings": {
                            "corpusPreference": self.config.corpus_preference,
                            "kidsNoSearchMode": self.config.no_search_mode,
                        }
                    }
                }
            },
            "query": query,
        });

        debug!("🔍 Searching upstream for: {}", query);
        self.post_json(&self.config.search_url, body, false).await
    }

    /// Query the browse endpoint for a feed or channel
    pub async fn browse(&self, browse_id: &str) -> Result<Value> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": self.config.client_name,
                    "clientVersion": self.config.client_version,
                }
            },
            "browseId": browse_id,
        });

        debug!("📺 Browsing upstream feed: {}", browse_id);
        self.post_json(&self.config.browse_url, body, true).await
    }

    /// POST a JSON body and return the parsed response tree
    async fn post_json(&self, url: &str, body: Value, browse_headers: bool) -> Result<Value> {
        let mut request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body);

        // The browse surface checks the web-client identification headers
        if browse_headers {
            request = request
                .header("x-youtube-client-name", &self.config.client_name_header)
                .header("x-youtube-client-version", &self.config.client_version)
                .header("origin", &self.config.origin);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Upstream API returned error status {} for {}", status, url);
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Check a search query against the endpoint's limits
///
/// The length limit counts characters, not bytes.
fn validate_query(query: &str) -> Result<()> {
    if query.is_empty() {
        return Err(Error::invalid_request("query is a required parameter"));
    }
    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(Error::invalid_request("query is too long"));
    }
    Ok(())
}

#[async_trait]
impl SourceFetcher for KidsApiClient {
    /// Fetch one curated channel and normalize everything found in it
    async fn fetch_source(&self, source_id: &str) -> Result<Vec<StreamItem>> {
        let tree = self.browse(source_id).await?;
        Ok(extract::scan_videos(&tree))
    }
}
