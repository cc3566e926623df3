//! End-to-end extraction tests over realistic upstream response trees

use serde_json::json;

use kids_video_aggregator::extract::{scan_videos, search_result_videos};
use kids_video_aggregator::models::{into_content_items, ContentItem, SearchResultPage};

/// A trimmed-down home feed response: cards nested in shelves at varying
/// depth, plus promotional entries without a video id.
fn browse_response() -> serde_json::Value {
    json!({
        "responseContext": {"visitorData": "Cgt0ZXN0"},
        "contents": {
            "kidsHomeScreenRenderer": {
                "anchors": [
                    {
                        "anchor": {
                            "shelf": {
                                "contents": [
                                    {
                                        "compactVideoRenderer": {
                                            "videoId": "home001",
                                            "title": {"runs": [{"text": "The Alphabet Song"}]},
                                            "thumbnail": {"thumbnails": [
                                                {"url": "https://i.ytimg.com/vi/home001/default.jpg"},
                                                {"url": "https://i.ytimg.com/vi/home001/hq720.jpg"}
                                            ]},
                                            "longBylineText": {"runs": [{
                                                "text": "Letter Friends",
                                                "navigationEndpoint": {"browseEndpoint": {"browseId": "UCletters"}}
                                            }]},
                                            "channelThumbnail": {"thumbnails": [
                                                {"url": "https://yt3.ggpht.com/letters_s.jpg"},
                                                {"url": "https://yt3.ggpht.com/letters_l.jpg"}
                                            ]},
                                            "publishedTimeText": {"simpleText": "1 month ago"},
                                            "lengthText": {"simpleText": "2:45"},
                                            "viewCountText": {"simpleText": "3.1M views"}
                                        }
                                    },
                                    {
                                        "promoRenderer": {"text": "Watch more!"}
                                    }
                                ]
                            }
                        }
                    },
                    {
                        "anchor": {
                            "shelf": {
                                "contents": [
                                    {
                                        "compactVideoRenderer": {
                                            "videoId": "home002",
                                            "title": {"simpleText": "Shapes for Toddlers"},
                                            "lengthText": {"simpleText": "10:02"},
                                            "viewCountText": {"simpleText": "54,321 views"}
                                        }
                                    },
                                    {
                                        // Channel card: renderer shape, no video id
                                        "compactVideoRenderer": {
                                            "title": {"simpleText": "Visit the channel"}
                                        }
                                    }
                                ]
                            }
                        }
                    }
                ]
            }
        }
    })
}

#[test]
fn test_browse_scan_end_to_end() {
    let items = scan_videos(&browse_response());

    assert_eq!(items.len(), 2);

    let first = &items[0];
    assert_eq!(first.url, "/watch?v=home001");
    assert_eq!(first.title, "The Alphabet Song");
    assert_eq!(first.thumbnail, "https://i.ytimg.com/vi/home001/hq720.jpg");
    assert_eq!(first.uploader_name, "Letter Friends");
    assert_eq!(first.uploader_url.as_deref(), Some("/channel/UCletters"));
    assert_eq!(first.uploader_avatar, "https://yt3.ggpht.com/letters_s.jpg");
    assert_eq!(first.uploaded_date, "1 month ago");
    assert_eq!(first.duration, 165);
    assert_eq!(first.views, 3_100_000);

    let second = &items[1];
    assert_eq!(second.url, "/watch?v=home002");
    assert_eq!(second.title, "Shapes for Toddlers");
    assert_eq!(second.duration, 602);
    assert_eq!(second.views, 54_321);
    assert_eq!(second.uploader_url, None);
    assert_eq!(second.thumbnail, "");
}

#[test]
fn test_search_response_end_to_end() {
    let response = json!({
        "contents": {
            "sectionListRenderer": {
                "contents": [{
                    "itemSectionRenderer": {
                        "contents": [
                            {
                                "compactVideoRenderer": {
                                    "videoId": "srch001",
                                    "title": {"runs": [{"text": "Dinosaur Facts"}]},
                                    "viewCountText": {"simpleText": "987 views"}
                                }
                            },
                            {"messageRenderer": {"text": "No more results"}}
                        ]
                    }
                }]
            }
        }
    });

    let items = search_result_videos(&response);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].url, "/watch?v=srch001");
    assert_eq!(items[0].views, 987);

    let page = SearchResultPage::new(into_content_items(items));
    let serialized = serde_json::to_value(&page).unwrap();
    assert_eq!(serialized["nextPageToken"], serde_json::Value::Null);
    assert_eq!(serialized["corrected"], false);
    assert_eq!(serialized["items"][0]["type"], "stream");
    assert_eq!(serialized["items"][0]["uploaded"], -1);
    assert_eq!(serialized["items"][0]["isShort"], false);
}

#[test]
fn test_content_item_wrapping_preserves_order() {
    let items = scan_videos(&browse_response());
    let wrapped = into_content_items(items.clone());

    for (item, content) in items.iter().zip(&wrapped) {
        let ContentItem::Stream(stream) = content;
        assert_eq!(stream, item);
    }
}
