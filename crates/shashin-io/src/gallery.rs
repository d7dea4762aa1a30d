//! Gallery widget adapter.
//!
//! The full-screen lightbox/slideshow is an external widget loaded by
//! a page `<script>` tag and exposed as a global `initGallery`
//! function. This module keeps the frame's dependency on it narrow:
//! [`GallerySink`] is the two-method surface the controller uses, and
//! [`LightboxGallery`] is the concrete adapter. The widget's internal
//! rendering and navigation engine is out of scope.

use wasm_bindgen::prelude::*;

use shashin_view::FrameConfig;

/// Errors from driving the gallery widget.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// No rendered grid links to open the gallery from.
    #[error("no gallery items to open")]
    Empty,
}

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Configuration handed to the gallery widget.
///
/// Mirrors the frame's presentation contract: fade transitions,
/// preloading of adjacent images, an auto-advancing slideshow, and a
/// caption read from each item's hidden `figcaption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryOptions {
    /// Selector matching the rendered full-size links.
    pub selector: String,
    /// Wrap from the last item back to the first.
    pub loop_items: bool,
    /// Preload images adjacent to the current one.
    pub preload: bool,
    /// Fade transition duration in milliseconds.
    pub transition_ms: u32,
    /// Auto-advance interval in milliseconds.
    pub slideshow_interval_ms: u32,
    /// Seconds of inactivity before the widget hides its chrome.
    pub idle_secs: u32,
    /// Selector, within each link, of the element holding the caption.
    pub caption_selector: String,
}

impl GalleryOptions {
    /// Derive the widget options from the frame configuration.
    #[must_use]
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            selector: config.gallery_selector.clone(),
            loop_items: true,
            preload: true,
            transition_ms: config.transition_ms,
            slideshow_interval_ms: config.slideshow_interval_ms,
            idle_secs: config.idle_secs,
            caption_selector: config.caption_selector.clone(),
        }
    }
}

/// The narrow gallery surface the presentation controller depends on.
pub trait GallerySink {
    /// Register the widget over the currently rendered links.
    ///
    /// `after_close` is invoked by the widget when the user leaves
    /// full-screen viewing; the frame uses it to re-trigger lazy
    /// loading over the restored grid.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::JsError`] if the options object cannot
    /// be constructed or the widget initializer throws.
    fn configure(
        &self,
        options: &GalleryOptions,
        after_close: Option<&js_sys::Function>,
    ) -> Result<(), GalleryError>;

    /// Open the gallery by activating the first grid link.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Empty`] when the grid holds no links,
    /// or [`GalleryError::JsError`] if the DOM query fails.
    fn open_first(&self) -> Result<(), GalleryError>;
}

/// Adapter around the page-global lightbox widget.
///
/// `configure` silently no-ops when the widget script is absent
/// (e.g. blocked, or during tests) -- the grid still works, only
/// full-screen viewing is unavailable.
pub struct LightboxGallery {
    /// CSS selector of the grid links to open the gallery from.
    link_selector: String,
}

impl LightboxGallery {
    /// Create an adapter opening from links matching `link_selector`.
    #[must_use]
    pub const fn new(link_selector: String) -> Self {
        Self { link_selector }
    }
}

impl GallerySink for LightboxGallery {
    fn configure(
        &self,
        options: &GalleryOptions,
        after_close: Option<&js_sys::Function>,
    ) -> Result<(), GalleryError> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };
        let Ok(init) = js_sys::Reflect::get(&window, &JsValue::from_str("initGallery")) else {
            return Ok(());
        };
        if !init.is_function() {
            return Ok(());
        }
        let init: js_sys::Function = init.unchecked_into();

        // Build the options object the widget expects:
        // { selector, loop, preload, animationEffect, transitionDuration,
        //   slideshowSpeed, idleTime, captionSelector, afterClose }
        let object = js_sys::Object::new();
        let set = |key: &str, value: &JsValue| -> Result<(), GalleryError> {
            js_sys::Reflect::set(&object, &JsValue::from_str(key), value)
                .map_err(|_| GalleryError::JsError(format!("failed to set option {key}")))?;
            Ok(())
        };
        set("selector", &JsValue::from_str(&options.selector))?;
        set("loop", &JsValue::from_bool(options.loop_items))?;
        set("preload", &JsValue::from_bool(options.preload))?;
        set("animationEffect", &JsValue::from_str("fade"))?;
        set(
            "transitionDuration",
            &JsValue::from_f64(f64::from(options.transition_ms)),
        )?;
        set(
            "slideshowSpeed",
            &JsValue::from_f64(f64::from(options.slideshow_interval_ms)),
        )?;
        set("idleTime", &JsValue::from_f64(f64::from(options.idle_secs)))?;
        set(
            "captionSelector",
            &JsValue::from_str(&options.caption_selector),
        )?;
        if let Some(after_close) = after_close {
            set("afterClose", after_close)?;
        }

        init.call1(&JsValue::NULL, &object)?;
        Ok(())
    }

    fn open_first(&self) -> Result<(), GalleryError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GalleryError::JsError("no document".into()))?;

        let first = document
            .query_selector(&self.link_selector)?
            .ok_or(GalleryError::Empty)?;
        let anchor: web_sys::HtmlElement = first
            .dyn_into()
            .map_err(|_| GalleryError::JsError("grid link is not an HTML element".into()))?;
        anchor.click();
        Ok(())
    }
}
