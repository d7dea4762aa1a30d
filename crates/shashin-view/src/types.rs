//! Shared types for the shashin view model.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single photo or video record as returned by the queue endpoint.
///
/// `base_url` and the metadata dimensions are required -- an item
/// without them cannot be rendered and fails deserialization. All
/// other fields are optional and degrade the caption gracefully.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Base image URL without a size suffix.
    pub base_url: String,

    /// Free-form item description from the photo service.
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the item in the originating photo service.
    pub product_url: String,

    /// Dimensions, timestamp, and camera metadata.
    pub media_metadata: MediaMetadata,
}

/// Dimensions, creation time, and optional camera metadata of a
/// [`MediaItem`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    /// Original width in pixels.
    #[serde(deserialize_with = "dimension")]
    pub width: u32,

    /// Original height in pixels.
    #[serde(deserialize_with = "dimension")]
    pub height: u32,

    /// Creation timestamp, passed through verbatim into the caption.
    pub creation_time: String,

    /// Camera metadata. Absent for video items.
    #[serde(default)]
    pub photo: Option<PhotoMetadata>,
}

/// Optional camera metadata used to build the technical-details
/// segment of a caption.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetadata {
    /// Camera model string, e.g. `"Pixel 7"`.
    #[serde(default)]
    pub camera_model: Option<String>,

    /// Focal length in millimetres.
    #[serde(default)]
    pub focal_length: Option<f64>,

    /// Aperture f-number.
    #[serde(default)]
    pub aperture_f_number: Option<f64>,

    /// ISO equivalent sensitivity.
    #[serde(default)]
    pub iso_equivalent: Option<u32>,
}

/// The queue endpoint's response body.
///
/// `parameters` describes how the selection was produced. It is
/// opaque to the frame: the grid serializes it verbatim for the
/// source label and never interprets it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueueResponse {
    /// Opaque search/selection descriptor.
    pub parameters: Value,

    /// The selected media items, in backend order.
    #[serde(default)]
    pub photos: Vec<MediaItem>,
}

/// Deserialize a pixel dimension from either a JSON number or a
/// numeric string.
///
/// The Google Photos API serializes `width`/`height` as strings
/// (`"4032"`); fixtures and other backends use plain numbers. Both
/// must parse to a positive integer.
fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s
            .parse::<u32>()
            .map_err(|_| de::Error::custom(format!("invalid pixel dimension: {s:?}")))?,
    };
    if value == 0 {
        return Err(de::Error::custom("pixel dimension must be positive"));
    }
    Ok(value)
}

/// Configuration for the photo frame front-end.
///
/// All parameters default to the frame's production values: a
/// 512x512 thumbnail bounding box, 30 s auto-advance, 1.5 s fade
/// transitions, and the fixed backend endpoint paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Thumbnail bounding box edge in pixels. Thumbnails are requested
    /// at `=w{n}-h{n}`.
    pub thumb_box: u32,

    /// Auto-advance interval of the gallery slideshow in milliseconds.
    pub slideshow_interval_ms: u32,

    /// Gallery fade transition duration in milliseconds.
    pub transition_ms: u32,

    /// Gallery chrome idle-hide delay in seconds.
    pub idle_secs: u32,

    /// Path of the queue endpoint.
    pub queue_endpoint: String,

    /// Path of the fire-and-forget cache-save endpoint.
    pub save_endpoint: String,

    /// CSS selector matching the rendered full-size links, handed to
    /// the gallery widget.
    pub gallery_selector: String,

    /// CSS selector matching deferred-load thumbnails, handed to the
    /// lazy-load observer.
    pub lazy_selector: String,

    /// CSS selector the gallery widget reads each item's caption from.
    pub caption_selector: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            thumb_box: 512,
            slideshow_interval_ms: 30_000,
            transition_ms: 1_500,
            idle_secs: 5,
            queue_endpoint: "/getQueue".to_owned(),
            save_endpoint: "/saveCached".to_owned(),
            gallery_selector: r#"a[data-gallery="frame"]"#.to_owned(),
            lazy_selector: "img.lazy[data-src]".to_owned(),
            caption_selector: "figcaption".to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn full_item_json() -> &'static str {
        r#"{
            "baseUrl": "https://lh3.example.com/abc",
            "description": "Sunset over the bay",
            "productUrl": "https://photos.example.com/item/abc",
            "mediaMetadata": {
                "width": "4032",
                "height": "3024",
                "creationTime": "2023-06-01T18:32:00Z",
                "photo": {
                    "cameraModel": "Pixel 7",
                    "focalLength": 6.81,
                    "apertureFNumber": 1.85,
                    "isoEquivalent": 100
                }
            }
        }"#
    }

    #[test]
    fn deserializes_full_item_with_string_dimensions() {
        let item: MediaItem = serde_json::from_str(full_item_json()).unwrap();
        assert_eq!(item.base_url, "https://lh3.example.com/abc");
        assert_eq!(item.media_metadata.width, 4032);
        assert_eq!(item.media_metadata.height, 3024);
        let photo = item.media_metadata.photo.unwrap();
        assert_eq!(photo.camera_model.as_deref(), Some("Pixel 7"));
        assert_eq!(photo.iso_equivalent, Some(100));
    }

    #[test]
    fn deserializes_numeric_dimensions() {
        let json = r#"{
            "baseUrl": "https://lh3.example.com/abc",
            "productUrl": "https://photos.example.com/item/abc",
            "mediaMetadata": {
                "width": 800,
                "height": 600,
                "creationTime": "2023-06-01T18:32:00Z"
            }
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.media_metadata.width, 800);
        assert_eq!(item.media_metadata.height, 600);
        assert!(item.media_metadata.photo.is_none());
        assert!(item.description.is_none());
    }

    #[test]
    fn rejects_item_without_base_url() {
        let json = r#"{
            "productUrl": "https://photos.example.com/item/abc",
            "mediaMetadata": {
                "width": 800,
                "height": 600,
                "creationTime": "2023-06-01T18:32:00Z"
            }
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn rejects_zero_dimension() {
        let json = r#"{
            "baseUrl": "https://lh3.example.com/abc",
            "productUrl": "https://photos.example.com/item/abc",
            "mediaMetadata": {
                "width": 0,
                "height": 600,
                "creationTime": "2023-06-01T18:32:00Z"
            }
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn rejects_non_numeric_dimension_string() {
        let json = r#"{
            "baseUrl": "https://lh3.example.com/abc",
            "productUrl": "https://photos.example.com/item/abc",
            "mediaMetadata": {
                "width": "wide",
                "height": "600",
                "creationTime": "2023-06-01T18:32:00Z"
            }
        }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn queue_response_parameters_are_opaque() {
        let json = format!(
            r#"{{
                "parameters": {{"albumId": "a1", "filters": {{"contentFilter": ["LANDSCAPES"]}}}},
                "photos": [{}]
            }}"#,
            full_item_json(),
        );
        let response: QueueResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.photos.len(), 1);
        // The descriptor round-trips verbatim, untouched by the model.
        assert_eq!(response.parameters["albumId"], "a1");
    }

    #[test]
    fn queue_response_photos_default_to_empty() {
        let response: QueueResponse = serde_json::from_str(r#"{"parameters": null}"#).unwrap();
        assert!(response.photos.is_empty());
    }

    #[test]
    fn config_defaults_match_production_values() {
        let config = FrameConfig::default();
        assert_eq!(config.thumb_box, 512);
        assert_eq!(config.slideshow_interval_ms, 30_000);
        assert_eq!(config.transition_ms, 1_500);
        assert_eq!(config.queue_endpoint, "/getQueue");
        assert_eq!(config.save_endpoint, "/saveCached");
    }
}
