//! shashin-io: Browser I/O and Dioxus component library.
//!
//! Handles the queue fetch, gallery-widget and lazy-load adapters,
//! error reporting, and provides the UI components for the shashin
//! photo frame.
//!
//! Everything here requires a browser environment
//! (`wasm32-unknown-unknown` target); the pure view model lives in
//! `shashin-view`.

pub mod components;
pub mod gallery;
pub mod lazy;
pub mod queue;
pub mod report;

pub use components::{LoadingIndicator, PhotoGrid, PreviewHeader, Toolbar};
pub use gallery::{GalleryError, GalleryOptions, GallerySink, LightboxGallery};
pub use lazy::{IntersectionLazyLoader, LazyLoadError, LazyLoadSink};
pub use queue::{QueueError, fetch_queue, save_cached};
