//! Dioxus UI components for the photo frame.
//!
//! Provides the thumbnail grid, the description header, the loading
//! indicator, and the floating toolbar.

mod grid;
mod header;
mod loading;
mod toolbar;

pub use grid::PhotoGrid;
pub use header::PreviewHeader;
pub use loading::LoadingIndicator;
pub use toolbar::Toolbar;
