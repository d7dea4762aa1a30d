//! Floating toolbar: slideshow, scroll toggle, cache save, clear,
//! and the manage/logout navigations.

use dioxus::prelude::*;

/// Navigate the page to `path` by assigning the location directly.
/// Manage and logout are navigations, not fetches.
fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Props for the [`Toolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Whether the slideshow-start control is enabled.
    pub slideshow_enabled: bool,
    /// Start the full-screen slideshow.
    pub on_slideshow: EventHandler<()>,
    /// Toggle the grid's scrolling mode.
    pub on_scroll_toggle: EventHandler<()>,
    /// Ask the backend to persist the current queue.
    pub on_save_cached: EventHandler<()>,
    /// Clear the grid back to the empty state.
    pub on_clear: EventHandler<()>,
}

/// The frame's control buttons.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    rsx! {
        div { class: "floating-buttons",
            button {
                id: "start-slideshow",
                class: "floating-button",
                disabled: !props.slideshow_enabled,
                onclick: move |_| props.on_slideshow.call(()),
                "Slideshow"
            }
            button {
                id: "start-scroll",
                class: "floating-button",
                onclick: move |_| props.on_scroll_toggle.call(()),
                "Scroll"
            }
            button {
                id: "save-cached",
                class: "floating-button",
                onclick: move |_| props.on_save_cached.call(()),
                "Save to cache"
            }
            button {
                id: "clear-preview",
                class: "floating-button",
                onclick: move |_| props.on_clear.call(()),
                "Clear"
            }
            button {
                id: "manage",
                class: "floating-button",
                onclick: move |_| navigate("/"),
                "Manage"
            }
            button {
                id: "logout",
                class: "floating-button",
                onclick: move |_| navigate("/logout"),
                "Log out"
            }
        }
    }
}
