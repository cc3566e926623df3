//! Scalar field extraction from upstream JSON nodes
//!
//! The upstream surface encodes the same logical field in more than one
//! shape depending on context. Each helper here knows the known
//! alternatives and returns an empty value when none of them match.

use serde_json::Value;

/// Extract plain text from a text node
///
/// Rich text arrives as a "runs" array of styled segments; plain text as a
/// "simpleText" field. The first run's text wins, then simpleText, then the
/// empty string.
pub fn text(node: &Value) -> String {
    if let Some(runs) = node.get("runs").and_then(Value::as_array) {
        if let Some(first) = runs.first() {
            return first["text"].as_str().unwrap_or_default().to_string();
        }
    }
    node["simpleText"].as_str().unwrap_or_default().to_string()
}

/// Extract the highest-resolution video thumbnail URL
///
/// Upstream orders video thumbnails ascending by resolution, so the last
/// entry is the largest.
pub fn video_thumbnail(node: &Value) -> String {
    node["thumbnails"]
        .as_array()
        .and_then(|thumbnails| thumbnails.last())
        .and_then(|thumbnail| thumbnail["url"].as_str())
        .unwrap_or_default()
        .to_string()
}

/// Extract the channel avatar thumbnail URL
///
/// Channel thumbnail arrays use the opposite convention from video
/// thumbnails: the first entry is the one to serve.
pub fn avatar_thumbnail(node: &Value) -> String {
    node["thumbnails"]
        .as_array()
        .and_then(|thumbnails| thumbnails.first())
        .and_then(|thumbnail| thumbnail["url"].as_str())
        .unwrap_or_default()
        .to_string()
}

/// Extract the channel id embedded in a byline text node
///
/// The first run may carry a navigation endpoint with a browse id; when it
/// does, that id identifies the uploader's channel.
pub fn channel_id(node: &Value) -> Option<String> {
    node.get("runs")?
        .as_array()?
        .first()?
        .get("navigationEndpoint")?
        .get("browseEndpoint")?
        .get("browseId")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_prefers_first_run() {
        let node = json!({
            "runs": [{"text": "Baby Shark"}, {"text": " Dance"}],
            "simpleText": "ignored"
        });
        assert_eq!(text(&node), "Baby Shark");
    }

    #[test]
    fn test_text_falls_back_to_simple_text() {
        let node = json!({"simpleText": "Wheels on the Bus"});
        assert_eq!(text(&node), "Wheels on the Bus");

        // Empty runs array also falls through
        let node = json!({"runs": [], "simpleText": "Wheels on the Bus"});
        assert_eq!(text(&node), "Wheels on the Bus");
    }

    #[test]
    fn test_text_empty_when_absent() {
        assert_eq!(text(&json!({})), "");
        assert_eq!(text(&Value::Null), "");
        assert_eq!(text(&json!("scalar")), "");
    }

    #[test]
    fn test_video_thumbnail_takes_last() {
        let node = json!({
            "thumbnails": [
                {"url": "https://i.ytimg.com/vi/x/default.jpg", "width": 120},
                {"url": "https://i.ytimg.com/vi/x/mqdefault.jpg", "width": 320},
                {"url": "https://i.ytimg.com/vi/x/hq720.jpg", "width": 1280}
            ]
        });
        assert_eq!(video_thumbnail(&node), "https://i.ytimg.com/vi/x/hq720.jpg");
    }

    #[test]
    fn test_avatar_thumbnail_takes_first() {
        let node = json!({
            "thumbnails": [
                {"url": "https://yt3.ggpht.com/small.jpg"},
                {"url": "https://yt3.ggpht.com/large.jpg"}
            ]
        });
        assert_eq!(avatar_thumbnail(&node), "https://yt3.ggpht.com/small.jpg");
    }

    #[test]
    fn test_thumbnails_empty_on_missing_or_empty_array() {
        assert_eq!(video_thumbnail(&json!({})), "");
        assert_eq!(video_thumbnail(&json!({"thumbnails": []})), "");
        assert_eq!(avatar_thumbnail(&json!({})), "");
        assert_eq!(avatar_thumbnail(&json!({"thumbnails": []})), "");
    }

    #[test]
    fn test_channel_id_from_browse_endpoint() {
        let node = json!({
            "runs": [{
                "text": "Sing Along",
                "navigationEndpoint": {
                    "browseEndpoint": {"browseId": "UCabc123"}
                }
            }]
        });
        assert_eq!(channel_id(&node), Some("UCabc123".to_string()));
    }

    #[test]
    fn test_channel_id_absent_without_endpoint() {
        let node = json!({"runs": [{"text": "Sing Along"}]});
        assert_eq!(channel_id(&node), None);
        assert_eq!(channel_id(&json!({"simpleText": "Sing Along"})), None);
        assert_eq!(channel_id(&Value::Null), None);
    }
}
