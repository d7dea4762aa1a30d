//! Sized image URL construction.
//!
//! The photo service serves any image at an arbitrary size by
//! appending `=w{width}-h{height}` to its base URL. The image is
//! scaled to fit the requested bounding box, never cropped.

/// Build a thumbnail URL bounded by `thumb_box` in both dimensions.
#[must_use]
pub fn thumbnail_url(base_url: &str, thumb_box: u32) -> String {
    format!("{base_url}=w{thumb_box}-h{thumb_box}")
}

/// Build a full-size URL requesting the item's exact original
/// dimensions.
#[must_use]
pub fn full_size_url(base_url: &str, width: u32, height: u32) -> String {
    format!("{base_url}=w{width}-h{height}")
}
