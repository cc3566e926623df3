//! Locating renderer fragments in upstream response trees
//!
//! Two traversal strategies coexist on purpose. The browse/home surface
//! nests video cards at positions that are not contractually stable, so it
//! gets a full depth-first scan for the marker key. The search surface has
//! kept a stable enough shape to address directly, so it gets a narrow
//! path-based walk that yields nothing when the path is absent.

use serde_json::Value;
use tracing::debug;

use super::renderer;
use crate::models::StreamItem;

/// Marker key identifying a video card in upstream responses
pub const RENDERER_KEY: &str = "compactVideoRenderer";

/// Collect every renderer fragment in the tree, depth-first
///
/// A matched fragment is descended into as well; a card nested inside
/// another card's payload is still found. Null, scalar, and malformed nodes
/// are skipped without error.
pub fn collect_renderers<'a>(node: &'a Value, out: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => {
            if let Some(fragment) = map.get(RENDERER_KEY) {
                out.push(fragment);
            }
            for child in map.values() {
                collect_renderers(child, out);
            }
        }
        Value::Array(elements) => {
            for child in elements {
                collect_renderers(child, out);
            }
        }
        _ => {}
    }
}

/// Scan a browse/home response and decode every video found
pub fn scan_videos(root: &Value) -> Vec<StreamItem> {
    let mut fragments = Vec::new();
    collect_renderers(root, &mut fragments);
    decode_fragments(&fragments)
}

/// Walk the stable search-result path and decode the videos under it
///
/// `contents → sectionListRenderer → contents → itemSectionRenderer →
/// contents`; any missing step yields zero items rather than an error.
pub fn search_result_videos(root: &Value) -> Vec<StreamItem> {
    let mut items = Vec::new();

    if let Some(sections) = root["contents"]["sectionListRenderer"]["contents"].as_array() {
        for section in sections {
            if let Some(entries) = section["itemSectionRenderer"]["contents"].as_array() {
                for entry in entries {
                    let fragment = &entry[RENDERER_KEY];
                    if !fragment.is_null() {
                        push_decoded(fragment, &mut items);
                    }
                }
            }
        }
    }

    items
}

fn decode_fragments(fragments: &[&Value]) -> Vec<StreamItem> {
    let mut items = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        push_decoded(fragment, &mut items);
    }
    items
}

fn push_decoded(fragment: &Value, items: &mut Vec<StreamItem>) {
    match renderer::decode(fragment) {
        Ok(item) => items.push(item),
        Err(e) => debug!("Skipping renderer fragment: {}", e),
    }
}
