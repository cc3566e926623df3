//! Decoding of a single video-renderer fragment

use serde_json::Value;
use thiserror::Error;

use super::{fields, numeric};
use crate::models::StreamItem;

/// Why a renderer fragment did not become a stream item
///
/// A missing video id is the common case: promotional and channel cards
/// share the renderer shape but identify no video. Callers skip these and
/// keep decoding sibling fragments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("renderer fragment has no video id")]
    MissingVideoId,
}

/// Decode one compact video renderer into a normalized stream item
///
/// Every field other than the video id is optional: absent text degrades to
/// an empty string, absent numerics to `-1`, an unresolvable channel id to a
/// missing uploader URL. Only a fragment without a video id is rejected.
pub fn decode(renderer: &Value) -> Result<StreamItem, DecodeError> {
    let video_id = renderer["videoId"].as_str().unwrap_or_default();
    if video_id.is_empty() {
        return Err(DecodeError::MissingVideoId);
    }

    // The kids surface puts the channel name in longBylineText
    let byline = &renderer["longBylineText"];
    let uploader_url = fields::channel_id(byline).map(|id| format!("/channel/{}", id));

    Ok(StreamItem {
        url: format!("/watch?v={}", video_id),
        title: fields::text(&renderer["title"]),
        thumbnail: fields::video_thumbnail(&renderer["thumbnail"]),
        uploader_name: fields::text(byline),
        uploader_url,
        uploader_avatar: fields::avatar_thumbnail(&renderer["channelThumbnail"]),
        uploaded_date: fields::text(&renderer["publishedTimeText"]),
        // Compact renderers carry no description
        short_description: String::new(),
        duration: numeric::parse_duration(&fields::text(&renderer["lengthText"])),
        views: numeric::parse_view_count(&fields::text(&renderer["viewCountText"])),
        uploaded: crate::models::UNKNOWN,
        uploader_verified: false,
        is_short: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_renderer() -> Value {
        json!({
            "videoId": "dQw4w9WgXcQ",
            "title": {"runs": [{"text": "Five Little Ducks"}]},
            "thumbnail": {
                "thumbnails": [
                    {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"},
                    {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg"}
                ]
            },
            "longBylineText": {
                "runs": [{
                    "text": "Nursery Rhymes TV",
                    "navigationEndpoint": {
                        "browseEndpoint": {"browseId": "UCnursery42"}
                    }
                }]
            },
            "channelThumbnail": {
                "thumbnails": [
                    {"url": "https://yt3.ggpht.com/avatar_s.jpg"},
                    {"url": "https://yt3.ggpht.com/avatar_l.jpg"}
                ]
            },
            "publishedTimeText": {"simpleText": "2 years ago"},
            "lengthText": {"simpleText": "3:05"},
            "viewCountText": {"simpleText": "1.2M views"}
        })
    }

    #[test]
    fn test_decode_full_fragment() {
        let item = decode(&full_renderer()).unwrap();
        assert_eq!(item.url, "/watch?v=dQw4w9WgXcQ");
        assert_eq!(item.title, "Five Little Ducks");
        assert_eq!(item.thumbnail, "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg");
        assert_eq!(item.uploader_name, "Nursery Rhymes TV");
        assert_eq!(item.uploader_url.as_deref(), Some("/channel/UCnursery42"));
        assert_eq!(item.uploader_avatar, "https://yt3.ggpht.com/avatar_s.jpg");
        assert_eq!(item.uploaded_date, "2 years ago");
        assert_eq!(item.short_description, "");
        assert_eq!(item.duration, 185);
        assert_eq!(item.views, 1_200_000);
        assert_eq!(item.uploaded, -1);
        assert!(!item.uploader_verified);
        assert!(!item.is_short);
    }

    #[test]
    fn test_decode_rejects_missing_video_id() {
        // Well-formed otherwise, but not a video
        let mut fragment = full_renderer();
        fragment.as_object_mut().unwrap().remove("videoId");
        assert_eq!(decode(&fragment), Err(DecodeError::MissingVideoId));

        let fragment = json!({"videoId": "", "title": {"simpleText": "x"}});
        assert_eq!(decode(&fragment), Err(DecodeError::MissingVideoId));
    }

    #[test]
    fn test_decode_bare_fragment_degrades_to_sentinels() {
        let item = decode(&json!({"videoId": "abc123"})).unwrap();
        assert_eq!(item.url, "/watch?v=abc123");
        assert_eq!(item.title, "");
        assert_eq!(item.thumbnail, "");
        assert_eq!(item.uploader_name, "");
        assert_eq!(item.uploader_url, None);
        assert_eq!(item.uploader_avatar, "");
        assert_eq!(item.uploaded_date, "");
        assert_eq!(item.duration, -1);
        assert_eq!(item.views, -1);
    }

    #[test]
    fn test_decode_without_channel_endpoint_keeps_item() {
        let fragment = json!({
            "videoId": "abc123",
            "longBylineText": {"runs": [{"text": "Some Channel"}]}
        });
        let item = decode(&fragment).unwrap();
        assert_eq!(item.uploader_name, "Some Channel");
        assert_eq!(item.uploader_url, None);
    }

    #[test]
    fn test_decode_unparsable_numerics_degrade() {
        let fragment = json!({
            "videoId": "abc123",
            "lengthText": {"simpleText": "LIVE"},
            "viewCountText": {"simpleText": "No views"}
        });
        let item = decode(&fragment).unwrap();
        assert_eq!(item.duration, -1);
        assert_eq!(item.views, -1);
    }
}
