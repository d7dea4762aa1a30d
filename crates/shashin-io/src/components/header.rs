//! Description panel and empty notice above the grid.

use dioxus::prelude::*;

use shashin_view::GridModel;

/// Props for the [`PreviewHeader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewHeaderProps {
    /// The grid model whose header state is shown.
    pub grid: GridModel,
}

/// Item count, serialized source descriptor, and the "no images"
/// notice.
///
/// The description panel is only rendered when a selection has been
/// loaded -- even an empty one -- so the user can tell "this search
/// matched nothing" apart from "no search selected yet".
#[component]
pub fn PreviewHeader(props: PreviewHeaderProps) -> Element {
    rsx! {
        if props.grid.description_visible {
            div { id: "preview-description", class: "preview-description",
                span { id: "images-count", "{props.grid.count}" }
                " images from "
                code { id: "images-source", "{props.grid.source_text}" }
            }
        }

        if props.grid.empty_notice_visible {
            p { id: "images-empty", class: "images-empty",
                "No images are loaded into the photo frame."
            }
        }
    }
}
