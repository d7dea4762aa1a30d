//! The thumbnail grid.
//!
//! Renders every [`GridItem`] as a full-size link wrapping a
//! deferred thumbnail and a hidden caption. The whole container is
//! rebuilt from the model on every render -- ordering lives in the
//! view state, not in the DOM.

use dioxus::prelude::*;

use shashin_view::{GridModel, PRODUCT_LINK_TEXT};

/// Props for the [`PhotoGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PhotoGridProps {
    /// The grid model to render.
    pub grid: GridModel,
    /// Whether the container is in scrolling mode.
    pub scrolling: bool,
}

/// The photo-frame grid container.
///
/// Each item emits:
/// - an `<a>` to the full-size URL, tagged for the gallery widget and
///   carrying the original dimensions as `data-width`/`data-height`
///   so the widget can pre-scale the thumbnail while the full image
///   loads,
/// - an `<img>` whose URL sits in `data-src` until the lazy loader
///   promotes it,
/// - a hidden `<figcaption>` holding the caption text and the link
///   into the photo service; the gallery widget reads it as the
///   full-screen caption.
///
/// All item-derived text passes through rsx interpolation, which
/// HTML-escapes it -- descriptions and camera models cannot inject
/// markup.
#[component]
pub fn PhotoGrid(props: PhotoGridProps) -> Element {
    let container_class = if props.scrolling {
        "images-grid scrolling"
    } else {
        "images-grid"
    };

    rsx! {
        div { id: "images-container", class: "{container_class}",
            for item in &props.grid.items {
                a {
                    href: "{item.full_url}",
                    "data-gallery": "frame",
                    "data-width": "{item.width}",
                    "data-height": "{item.height}",

                    img {
                        class: "thumbnail lazy",
                        "data-src": "{item.thumb_url}",
                        alt: "{item.caption}",
                    }

                    figcaption { class: "hidden",
                        "{item.caption} "
                        a { href: "{item.product_url}", {PRODUCT_LINK_TEXT} }
                    }
                }
            }
        }
    }
}
