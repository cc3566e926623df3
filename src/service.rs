//! Service-level operations combining the client, scanner, and aggregator

use tracing::{info, warn};

use crate::aggregator::CuratedAggregator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract;
use crate::models::{self, ContentItem, SearchResultPage};
use crate::upstream::{KidsApiClient, KIDS_HOME_BROWSE_ID};

/// The three content operations offered to the surrounding request layer
pub struct KidsService {
    client: KidsApiClient,
    aggregator: CuratedAggregator,
}

impl KidsService {
    pub fn new(config: Config) -> Self {
        let client = KidsApiClient::new(config.upstream);
        let aggregator = CuratedAggregator::new(config.aggregation, config.sources.channels);
        Self { client, aggregator }
    }

    /// Search for kid-friendly videos
    ///
    /// The filter parameter is accepted for interface compatibility and
    /// ignored; this surface always returns videos. The result page never
    /// carries a continuation token.
    pub async fn search(&self, query: &str, filter: Option<&str>) -> Result<SearchResultPage> {
        if let Some(filter) = filter {
            tracing::debug!("Ignoring search filter {:?} on the kids surface", filter);
        }

        let tree = self.client.search(query).await?;
        let items = extract::search_result_videos(&tree);
        info!("🔍 Search returned {} videos", items.len());

        Ok(SearchResultPage::new(models::into_content_items(items)))
    }

    /// Fetch the kids home feed, falling back to curated channels
    ///
    /// The region parameter is required but only checked for presence; the
    /// upstream surface does not regionalize this feed. When the home feed
    /// fails upstream or scans to nothing, the curated channel list fills in
    /// so the caller still gets content.
    pub async fn videos(&self, region: Option<&str>) -> Result<Vec<ContentItem>> {
        if region.map_or(true, str::is_empty) {
            return Err(Error::invalid_request("region is a required parameter"));
        }

        let home = match self.client.browse(KIDS_HOME_BROWSE_ID).await {
            Ok(tree) => extract::scan_videos(&tree),
            Err(e) if e.is_upstream() => {
                warn!("Home feed unavailable ({}), using curated channels", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        if !home.is_empty() {
            info!("📺 Home feed returned {} videos", home.len());
            return Ok(models::into_content_items(home));
        }

        let curated = self.aggregator.aggregate(&self.client).await;
        Ok(models::into_content_items(curated))
    }

    /// Trending is rewired to kid-friendly content on this service
    pub async fn trending(&self, region: Option<&str>) -> Result<Vec<ContentItem>> {
        self.videos(region).await
    }
}
