//! Caption construction from media metadata.
//!
//! A caption is the creation time, an optional `: <camera model>`
//! segment, and a bracketed technical-details segment built from
//! whichever of focal length, aperture, and ISO are present.
//!
//! Missing sub-fields contribute empty strings while the brackets and
//! separating spaces are emitted unconditionally, so captions with
//! sparse metadata contain redundant whitespace (e.g. `"TIME  [ ]"`).
//! This mirrors the frame's historical output and the gallery widget
//! renders it fine; do not "fix" the spacing.

use crate::types::MediaMetadata;

/// Build the display caption for one media item.
#[must_use]
pub fn build_caption(metadata: &MediaMetadata) -> String {
    let photo = metadata.photo.as_ref();

    let model = photo
        .and_then(|p| p.camera_model.as_deref())
        .map_or_else(String::new, |m| format!(": {m}"));
    let focal_length = photo
        .and_then(|p| p.focal_length)
        .map_or_else(String::new, |f| format!(" {f}mm "));
    let aperture = photo
        .and_then(|p| p.aperture_f_number)
        .map_or_else(String::new, |a| format!(" f/{a}"));
    let iso = photo
        .and_then(|p| p.iso_equivalent)
        .map_or_else(String::new, |i| format!(" ISO{i}"));

    format!(
        "{} {model} [{focal_length}{aperture} {iso}]",
        metadata.creation_time,
    )
}
