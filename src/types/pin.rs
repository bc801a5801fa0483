//! Pin types.

use super::Owner;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pin on a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pin {
    /// Pin identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Creation timestamp (ISO 8601)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Destination link
    #[serde(default)]
    pub link: Option<String>,
    /// Pin title
    #[serde(default)]
    pub title: Option<String>,
    /// Pin description
    #[serde(default)]
    pub description: Option<String>,
    /// Alt text for accessibility
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Board the pin lives on
    #[serde(default)]
    pub board_id: Option<String>,
    /// Section within the board, if any
    #[serde(default)]
    pub board_section_id: Option<String>,
    /// Pin this pin was saved from, if any
    #[serde(default)]
    pub parent_pin_id: Option<String>,
    /// Owner of the board
    #[serde(default)]
    pub board_owner: Option<Owner>,
    /// Attached media
    #[serde(default)]
    pub media: Option<PinMedia>,
}

/// Media attached to a pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinMedia {
    /// Available image renditions keyed by size label
    #[serde(default)]
    pub images: Option<HashMap<String, ImageDetail>>,
    /// Media type (e.g. `image`, `video`)
    #[serde(default)]
    pub media_type: Option<String>,
}

/// One image rendition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDetail {
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Image URL
    #[serde(default)]
    pub url: Option<String>,
}

/// Media source for creating a pin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSource {
    /// Source type: `image_url`, `multiple_image_urls`, `video_id`
    pub source_type: String,
    /// Image URL for `image_url` sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Registered media id for `video_id` sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
    /// Cover image URL for video sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Image URLs for `multiple_image_urls` sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MediaSourceItem>>,
    /// Content type of directly uploaded media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Base64 payload of directly uploaded media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl MediaSource {
    /// Media source referencing a single image URL
    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            source_type: "image_url".to_string(),
            url: Some(url.into()),
            media_id: None,
            cover_image_url: None,
            items: None,
            content_type: None,
            data: None,
        }
    }

    /// Media source referencing a previously registered video upload
    pub fn video_id(media_id: impl Into<String>, cover_image_url: impl Into<String>) -> Self {
        Self {
            source_type: "video_id".to_string(),
            url: None,
            media_id: Some(media_id.into()),
            cover_image_url: Some(cover_image_url.into()),
            items: None,
            content_type: None,
            data: None,
        }
    }

    /// Media source carrying several image URLs (carousel)
    pub fn multiple_image_urls(items: Vec<MediaSourceItem>) -> Self {
        Self {
            source_type: "multiple_image_urls".to_string(),
            url: None,
            media_id: None,
            cover_image_url: None,
            items: Some(items),
            content_type: None,
            data: None,
        }
    }
}

/// One image in a `multiple_image_urls` media source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaSourceItem {
    /// Image URL
    pub url: String,
    /// Per-image title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Per-image description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pin_decodes_with_absent_fields() {
        let pin: Pin = serde_json::from_value(json!({"id": "813744226420795884"})).unwrap();
        assert_eq!(pin.id.as_deref(), Some("813744226420795884"));
        assert!(pin.title.is_none());
        assert!(pin.media.is_none());
    }

    #[test]
    fn test_pin_decodes_nested_media() {
        let pin: Pin = serde_json::from_value(json!({
            "id": "813744226420795884",
            "media": {
                "media_type": "image",
                "images": {
                    "150x150": {"width": 150, "height": 150, "url": "https://i.pinimg.com/150x150/a.jpg"}
                }
            }
        }))
        .unwrap();

        let media = pin.media.unwrap();
        assert_eq!(media.media_type.as_deref(), Some("image"));
        let images = media.images.unwrap();
        assert_eq!(images["150x150"].width, Some(150));
    }

    #[test]
    fn test_media_source_image_url_serializes_sparse() {
        let source = MediaSource::image_url("https://example.com/a.jpg");
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(
            value,
            json!({"source_type": "image_url", "url": "https://example.com/a.jpg"})
        );
    }

    #[test]
    fn test_media_source_video_id() {
        let source = MediaSource::video_id("123", "https://example.com/cover.jpg");
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["source_type"], "video_id");
        assert_eq!(value["media_id"], "123");
        assert!(value.get("url").is_none());
    }
}
