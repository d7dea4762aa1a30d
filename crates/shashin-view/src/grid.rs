//! Grid model construction.
//!
//! [`build_grid`] converts an optional source descriptor and an
//! optional item sequence into a complete [`GridModel`] -- an
//! immutable description of everything the grid renderer shows.
//! The model is built fresh on every call; there is no diffing and
//! no identity carried across renders.

use serde_json::Value;

use crate::caption::build_caption;
use crate::types::{FrameConfig, MediaItem};
use crate::urls::{full_size_url, thumbnail_url};

/// Source label shown when no photo search has been selected.
pub const SOURCE_PLACEHOLDER: &str = "No photo search selected";

/// Link text of the secondary per-item link into the photo service.
pub const PRODUCT_LINK_TEXT: &str = "[Click to open in Google Photos]";

/// One rendered grid entry: a full-size link wrapping a deferred
/// thumbnail and a hidden caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    /// Link target at the item's exact original dimensions.
    pub full_url: String,

    /// Thumbnail URL bounded by the configured box, loaded lazily.
    pub thumb_url: String,

    /// Original width in pixels, exposed to the gallery widget for
    /// pre-scaling.
    pub width: u32,

    /// Original height in pixels.
    pub height: u32,

    /// Caption text, also used as the thumbnail's alt text.
    pub caption: String,

    /// Link into the originating photo service.
    pub product_url: String,
}

/// Complete description of the grid area for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    /// Number of items, shown in the count label.
    pub count: usize,

    /// Serialized source descriptor, or [`SOURCE_PLACEHOLDER`].
    pub source_text: String,

    /// Whether the description panel (count + source) is shown.
    pub description_visible: bool,

    /// Whether the "no images" notice is shown.
    pub empty_notice_visible: bool,

    /// Whether the slideshow-start control is enabled.
    pub slideshow_enabled: bool,

    /// Grid entries in display order.
    pub items: Vec<GridItem>,
}

impl GridModel {
    /// The empty-state model: what rendering `(None, None)` yields.
    #[must_use]
    pub fn empty() -> Self {
        build_grid(None, None, &FrameConfig::default())
    }
}

/// Build a grid model from a source descriptor and media items.
///
/// Items are emitted in input order -- callers wanting a shuffled
/// grid reorder the slice first (see [`crate::state::ViewState`]).
///
/// The description panel is shown only when both `source` and
/// `items` are present, which distinguishes "a search selected
/// nothing" from "no search selected yet". The empty notice and the
/// slideshow control track whether any items exist at all.
#[must_use]
pub fn build_grid(
    source: Option<&Value>,
    items: Option<&[&MediaItem]>,
    config: &FrameConfig,
) -> GridModel {
    let (count, source_text, description_visible) = match (source, items) {
        (Some(source), Some(items)) => (
            items.len(),
            serde_json::to_string(source).unwrap_or_else(|_| SOURCE_PLACEHOLDER.to_owned()),
            true,
        ),
        _ => (0, SOURCE_PLACEHOLDER.to_owned(), false),
    };

    let has_items = items.is_some_and(|items| !items.is_empty());

    let grid_items = items.map_or_else(Vec::new, |items| {
        items
            .iter()
            .map(|item| {
                let metadata = &item.media_metadata;
                GridItem {
                    full_url: full_size_url(&item.base_url, metadata.width, metadata.height),
                    thumb_url: thumbnail_url(&item.base_url, config.thumb_box),
                    width: metadata.width,
                    height: metadata.height,
                    caption: build_caption(metadata),
                    product_url: item.product_url.clone(),
                }
            })
            .collect()
    });

    GridModel {
        count,
        source_text,
        description_visible,
        empty_notice_visible: !has_items,
        slideshow_enabled: has_items,
        items: grid_items,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{MediaMetadata, PhotoMetadata};
    use serde_json::json;

    fn item(n: u32) -> MediaItem {
        MediaItem {
            base_url: format!("https://lh3.example.com/item{n}"),
            description: None,
            product_url: format!("https://photos.example.com/item/{n}"),
            media_metadata: MediaMetadata {
                width: 4000 + n,
                height: 3000 + n,
                creation_time: format!("2023-06-0{n}T12:00:00Z"),
                photo: Some(PhotoMetadata {
                    camera_model: Some("Pixel 7".to_owned()),
                    focal_length: Some(6.81),
                    aperture_f_number: Some(1.85),
                    iso_equivalent: Some(100),
                }),
            },
        }
    }

    fn refs(items: &[MediaItem]) -> Vec<&MediaItem> {
        items.iter().collect()
    }

    #[test]
    fn null_null_yields_cleared_state() {
        let grid = build_grid(None, None, &FrameConfig::default());
        assert_eq!(grid.count, 0);
        assert_eq!(grid.source_text, SOURCE_PLACEHOLDER);
        assert!(!grid.description_visible);
        assert!(grid.empty_notice_visible);
        assert!(!grid.slideshow_enabled);
        assert!(grid.items.is_empty());
    }

    #[test]
    fn source_with_empty_items_still_shows_description() {
        let source = json!({"albumId": "a1"});
        let grid = build_grid(Some(&source), Some(&[]), &FrameConfig::default());
        assert_eq!(grid.count, 0);
        assert!(grid.description_visible, "selected-nothing differs from nothing-selected");
        assert!(grid.empty_notice_visible);
        assert!(!grid.slideshow_enabled);
    }

    #[test]
    fn source_text_is_verbatim_json() {
        let source = json!({"filters": {"contentFilter": ["LANDSCAPES"]}});
        let items = vec![item(1)];
        let grid = build_grid(Some(&source), Some(&refs(&items)), &FrameConfig::default());
        assert_eq!(
            grid.source_text,
            r#"{"filters":{"contentFilter":["LANDSCAPES"]}}"#,
        );
    }

    #[test]
    fn items_are_emitted_in_input_order_with_sized_urls() {
        let source = json!({"albumId": "a1"});
        let items = vec![item(1), item(2), item(3)];
        let grid = build_grid(Some(&source), Some(&refs(&items)), &FrameConfig::default());

        assert_eq!(grid.count, 3);
        assert_eq!(grid.items.len(), 3);
        assert!(!grid.empty_notice_visible);
        assert!(grid.slideshow_enabled);

        for (n, entry) in (1..=3u32).zip(&grid.items) {
            assert_eq!(
                entry.full_url,
                format!("https://lh3.example.com/item{n}=w{}-h{}", 4000 + n, 3000 + n),
            );
            assert_eq!(
                entry.thumb_url,
                format!("https://lh3.example.com/item{n}=w512-h512"),
            );
            assert_eq!(entry.width, 4000 + n);
            assert_eq!(entry.height, 3000 + n);
            assert_eq!(
                entry.product_url,
                format!("https://photos.example.com/item/{n}"),
            );
        }
    }

    #[test]
    fn captions_flow_into_grid_items() {
        let source = json!({});
        let items = vec![item(1)];
        let grid = build_grid(Some(&source), Some(&refs(&items)), &FrameConfig::default());
        let caption = &grid.items[0].caption;
        assert!(caption.contains("2023-06-01T12:00:00Z"));
        assert!(caption.contains(": Pixel 7"));
        assert!(caption.contains("6.81mm"));
    }

    #[test]
    fn thumb_box_is_configurable() {
        let config = FrameConfig {
            thumb_box: 256,
            ..FrameConfig::default()
        };
        let source = json!({});
        let items = vec![item(1)];
        let grid = build_grid(Some(&source), Some(&refs(&items)), &config);
        assert!(grid.items[0].thumb_url.ends_with("=w256-h256"));
    }

    #[test]
    fn empty_model_matches_null_null() {
        assert_eq!(GridModel::empty(), build_grid(None, None, &FrameConfig::default()));
    }
}
