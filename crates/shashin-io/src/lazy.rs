//! Deferred thumbnail loading via `IntersectionObserver`.
//!
//! Thumbnails are rendered with their URL in a `data-src` attribute
//! instead of `src`, so the browser downloads nothing until an image
//! approaches the viewport. [`IntersectionLazyLoader`] promotes
//! `data-src` to `src` on intersection and unobserves the element.
//!
//! Each [`observe`](LazyLoadSink::observe) call builds a **fresh**
//! observer over the elements currently in the DOM. The grid is
//! rebuilt wholesale on every render, so re-observing after each
//! render is required -- reusing an observer would leave it watching
//! detached nodes.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

/// Errors from setting up deferred loading.
#[derive(Debug, thiserror::Error)]
pub enum LazyLoadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for LazyLoadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// The narrow lazy-loading surface the presentation controller
/// depends on.
pub trait LazyLoadSink {
    /// Observe all currently tagged thumbnails, replacing any prior
    /// observation. Returns the number of elements now observed.
    ///
    /// # Errors
    ///
    /// Returns [`LazyLoadError::JsError`] if the DOM query or the
    /// observer construction fails.
    fn observe(&self) -> Result<usize, LazyLoadError>;
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `IntersectionObserver`-backed lazy loader.
pub struct IntersectionLazyLoader {
    /// Selector matching deferred thumbnails, e.g. `img.lazy[data-src]`.
    selector: String,
    /// The live observer and its callback. Replaced wholesale on each
    /// `observe` call; dropping the old pair disconnects it.
    active: RefCell<Option<(web_sys::IntersectionObserver, ObserverCallback)>>,
}

impl IntersectionLazyLoader {
    /// Create a loader for thumbnails matching `selector`.
    #[must_use]
    pub const fn new(selector: String) -> Self {
        Self {
            selector,
            active: RefCell::new(None),
        }
    }
}

impl LazyLoadSink for IntersectionLazyLoader {
    fn observe(&self) -> Result<usize, LazyLoadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| LazyLoadError::JsError("no document".into()))?;

        // Disconnect the previous observer before replacing it; its
        // targets may no longer be in the DOM.
        if let Some((old, _)) = self.active.borrow_mut().take() {
            old.disconnect();
        }

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(img) = target.dyn_ref::<web_sys::HtmlImageElement>() {
                        if let Some(src) = img.get_attribute("data-src") {
                            img.set_src(&src);
                            let _ = img.remove_attribute("data-src");
                        }
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let observer = web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())?;

        let nodes = document.query_selector_all(&self.selector)?;
        let mut observed = 0;
        for index in 0..nodes.length() {
            if let Some(node) = nodes.get(index) {
                if let Some(element) = node.dyn_ref::<web_sys::Element>() {
                    observer.observe(element);
                    observed += 1;
                }
            }
        }

        *self.active.borrow_mut() = Some((observer, callback));
        Ok(observed)
    }
}
