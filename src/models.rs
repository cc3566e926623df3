//! Normalized content types returned to downstream consumers

use serde::{Deserialize, Serialize};

/// Sentinel for numeric fields the upstream surface does not provide
pub const UNKNOWN: i64 = -1;

/// One normalized video entry
///
/// Fields the kids surface cannot supply are pinned to sentinels: `uploaded`
/// is always `-1`, `uploader_verified` and `is_short` are always `false`,
/// and `short_description` is empty because compact renderers carry no
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamItem {
    /// Relative watch URL, `/watch?v=<id>`
    pub url: String,
    pub title: String,
    /// Highest-resolution thumbnail URL, empty when absent
    pub thumbnail: String,
    pub uploader_name: String,
    /// `/channel/<id>` when the byline carries a browse endpoint
    pub uploader_url: Option<String>,
    pub uploader_avatar: String,
    /// Free-form text like "3 weeks ago", empty when absent
    pub uploaded_date: String,
    pub short_description: String,
    /// Length in seconds, `-1` when unknown
    pub duration: i64,
    /// View count, `-1` when unknown
    pub views: i64,
    /// Upload timestamp, always `-1` on this surface
    pub uploaded: i64,
    pub uploader_verified: bool,
    pub is_short: bool,
}

/// Polymorphic content entry; this service only ever produces streams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentItem {
    #[serde(rename = "stream")]
    Stream(StreamItem),
}

impl From<StreamItem> for ContentItem {
    fn from(item: StreamItem) -> Self {
        ContentItem::Stream(item)
    }
}

/// One page of search results
///
/// The kids surface does not paginate, so `next_page_token` is always absent
/// and `corrected` is always false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub items: Vec<ContentItem>,
    pub next_page_token: Option<String>,
    pub corrected: bool,
}

impl SearchResultPage {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            next_page_token: None,
            corrected: false,
        }
    }
}

/// Wrap normalized stream items into the polymorphic output type
pub fn into_content_items(items: Vec<StreamItem>) -> Vec<ContentItem> {
    items.into_iter().map(ContentItem::from).collect()
}
