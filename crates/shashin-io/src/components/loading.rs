//! Loading indicator shown while the queue fetch is in flight.

use dioxus::prelude::*;

/// Props for the [`LoadingIndicator`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LoadingIndicatorProps {
    /// Whether a request is currently in flight.
    pub visible: bool,
}

/// A pulsing "Loading..." banner.
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        if props.visible {
            div { id: "loading-dialog", class: "loading-dialog",
                p { class: "pulse", "Loading..." }
            }
        }
    }
}
