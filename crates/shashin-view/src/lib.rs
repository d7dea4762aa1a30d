//! shashin-view: Pure view model for the photo frame (sans-IO).
//!
//! Converts the backend's queue response into a renderable grid model:
//! media items -> thumbnail/full-size URLs -> captions -> grid, with a
//! randomized display order for the slideshow.
//!
//! This crate has **no browser dependencies** -- it operates on
//! deserialized data and returns structured descriptions of what to
//! render. All DOM and network interaction lives in `shashin-io`.

pub mod caption;
pub mod grid;
pub mod shuffle;
pub mod state;
pub mod types;
pub mod urls;

pub use grid::{GridItem, GridModel, PRODUCT_LINK_TEXT, SOURCE_PLACEHOLDER, build_grid};
pub use state::{FrameMode, PresentationContext, ViewState};
pub use types::{FrameConfig, MediaItem, MediaMetadata, PhotoMetadata, QueueResponse};
