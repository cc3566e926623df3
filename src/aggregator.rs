//! Multi-source aggregation over the curated channel list
//!
//! Best-effort by contract: a failing source is logged and skipped, and an
//! all-sources-failed run returns an empty list as a valid result. The two
//! passes and their budgets are named configuration, not scattered numbers.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::AggregationPolicy;
use crate::error::Result;
use crate::models::StreamItem;

/// Fetches and normalizes the videos of one curated source
///
/// The production implementation is the upstream client (browse the channel,
/// scan the tree); tests substitute stubs.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch_source(&self, source_id: &str) -> Result<Vec<StreamItem>>;
}

/// Two-phase aggregation over an ordered list of curated sources
pub struct CuratedAggregator {
    policy: AggregationPolicy,
    sources: Vec<String>,
}

impl CuratedAggregator {
    pub fn new(policy: AggregationPolicy, sources: Vec<String>) -> Self {
        Self { policy, sources }
    }

    /// Collect items source by source until the target count is reached
    ///
    /// Primary pass: the first `primary_source_limit` sources in order,
    /// `primary_cap` items each. Fallback pass: only when the total is still
    /// below `fallback_floor` and unvisited sources remain, continuing where
    /// the primary pass stopped with `fallback_cap` items per source. Both
    /// passes check the `target_total` budget before issuing a fetch, so no
    /// source is contacted once the budget is spent. Result order is source
    /// order, then each source's natural item order.
    pub async fn aggregate<F>(&self, fetcher: &F) -> Vec<StreamItem>
    where
        F: SourceFetcher + ?Sized,
    {
        let mut items: Vec<StreamItem> = Vec::new();
        let primary_count = self.policy.primary_source_limit.min(self.sources.len());

        for source in &self.sources[..primary_count] {
            if items.len() >= self.policy.target_total {
                break;
            }
            self.fetch_into(fetcher, source, self.policy.primary_cap, &mut items)
                .await;
        }

        if items.len() < self.policy.fallback_floor && primary_count < self.sources.len() {
            info!(
                "📉 Primary pass collected {} items (floor {}), extending to fallback sources",
                items.len(),
                self.policy.fallback_floor
            );
            for source in &self.sources[primary_count..] {
                if items.len() >= self.policy.target_total {
                    break;
                }
                self.fetch_into(fetcher, source, self.policy.fallback_cap, &mut items)
                    .await;
            }
        }

        info!("✅ Aggregated {} items from curated sources", items.len());
        items
    }

    /// Fetch one source, appending up to `cap` of its items
    ///
    /// Failure is downgraded to a skip; a broken source must never take the
    /// whole aggregation down with it.
    async fn fetch_into<F>(
        &self,
        fetcher: &F,
        source: &str,
        cap: usize,
        items: &mut Vec<StreamItem>,
    ) where
        F: SourceFetcher + ?Sized,
    {
        match fetcher.fetch_source(source).await {
            Ok(videos) => {
                let taken = videos.len().min(cap);
                debug!("Source {} contributed {} items", source, taken);
                items.extend(videos.into_iter().take(cap));
            }
            Err(e) => {
                warn!("Skipping source {}: {}", source, e);
            }
        }
    }
}
