//! shashin: browser front-end for the photo frame.
//!
//! Loads the user's selected queue from the backend, renders it as a
//! lazily loaded thumbnail grid, and drives the external gallery
//! widget for full-screen slideshow playback.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use shashin_io::report::report_error;
use shashin_io::{
    GalleryOptions, GallerySink, IntersectionLazyLoader, LazyLoadSink, LightboxGallery,
    LoadingIndicator, PhotoGrid, PreviewHeader, Toolbar, fetch_queue, save_cached,
};
use shashin_view::{FrameConfig, FrameMode, PresentationContext, ViewState};

fn main() {
    dioxus::launch(app);
}

/// The current page location, or empty outside a browser.
fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Shuffle the display order, then open the gallery from the first
/// grid link once the reordered grid has rendered.
fn start_slideshow(mut state: Signal<ViewState>, gallery: Rc<LightboxGallery>) {
    spawn(async move {
        {
            let mut view = state.write();
            view.on_slideshow_started();
            view.shuffle(&mut rand::rng());
        }
        // Yield so the browser mounts the reordered grid before the
        // click lands on its first link.
        TimeoutFuture::new(0).await;
        if let Err(e) = gallery.open_first() {
            report_error("Could not start slideshow", &e);
        }
    });
}

/// Root application component.
///
/// Owns the view state and wires the queue loader, the grid, the
/// gallery widget, and the lazy-load observer together.
fn app() -> Element {
    // --- Application state ---
    let config = use_hook(|| Rc::new(FrameConfig::default()));
    let mut state = use_signal(|| ViewState::new(FrameConfig::default()));
    let mut error = use_signal(|| Option::<String>::None);

    // --- Browser collaborators, created once ---
    let gallery = use_hook(|| {
        Rc::new(LightboxGallery::new(format!(
            "#images-container {}",
            config.gallery_selector,
        )))
    });
    let lazy = use_hook(|| Rc::new(IntersectionLazyLoader::new(config.lazy_selector.clone())));

    // When the gallery closes, the grid is back on screen with
    // possibly still-deferred thumbnails; leave slideshow mode so
    // the toolbar reappears, and re-observe them. The closure lives
    // for the app's lifetime.
    let after_close: Rc<Closure<dyn FnMut()>> = use_hook(|| {
        let lazy = Rc::clone(&lazy);
        Rc::new(Closure::new(move || {
            state.write().on_gallery_closed();
            if let Err(e) = lazy.observe() {
                report_error("Could not re-arm lazy loading", &e);
            }
        }))
    });

    // --- Initial queue load ---
    // Runs once on mount: fetch, render, then either start the
    // slideshow (slideshow page) or arm lazy loading (grid page).
    let load_config = Rc::clone(&config);
    let load_gallery = Rc::clone(&gallery);
    let load_lazy = Rc::clone(&lazy);
    let load_hook = Rc::clone(&after_close);
    use_effect(move || {
        let config = Rc::clone(&load_config);
        let gallery = Rc::clone(&load_gallery);
        let lazy = Rc::clone(&load_lazy);
        let after_close = Rc::clone(&load_hook);

        spawn(async move {
            state.write().on_load_started();
            match fetch_queue(&config.queue_endpoint).await {
                Ok(response) => {
                    error.set(None);

                    let context = PresentationContext::from_href(&current_href());
                    state.write().on_queue_loaded(response, context);

                    // Yield so the fresh grid is in the DOM before the
                    // widget and the observer are pointed at it.
                    TimeoutFuture::new(0).await;

                    let options = GalleryOptions::from_config(&config);
                    let hook: &js_sys::Function = after_close.as_ref().as_ref().unchecked_ref();
                    if let Err(e) = gallery.configure(&options, Some(hook)) {
                        report_error("Could not configure gallery", &e);
                    }

                    match state.peek().mode() {
                        FrameMode::SlideshowActive => start_slideshow(state, gallery),
                        FrameMode::GridLazy => {
                            if let Err(e) = lazy.observe() {
                                report_error("Could not defer thumbnail loading", &e);
                            }
                        }
                        FrameMode::Idle => {}
                    }
                }
                Err(e) => {
                    // The grid keeps whatever it showed before the
                    // failed call; only the indicator comes down.
                    state.write().on_load_failed();
                    report_error("Could not load queue", &e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    // --- Toolbar handlers ---
    let on_slideshow = {
        let gallery = Rc::clone(&gallery);
        move |()| start_slideshow(state, Rc::clone(&gallery))
    };
    let on_scroll_toggle = move |()| state.write().toggle_scroll();
    let on_save_cached = {
        let endpoint = state.peek().config().save_endpoint.clone();
        move |()| save_cached(&endpoint)
    };
    let on_clear = move |()| state.write().on_clear();

    // --- Layout ---
    let view = state.read();
    let grid = view.grid();
    let slideshow_enabled = grid.slideshow_enabled;

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/frame.css") }

        div { class: "frame",
            header { class: "frame-header",
                h1 { "shashin" }
                PreviewHeader { grid: grid.clone() }
            }

            LoadingIndicator { visible: view.is_loading() }

            if let Some(ref err) = error() {
                div { class: "error-panel",
                    p { "Could not load queue: {err}" }
                }
            }

            PhotoGrid { grid, scrolling: view.is_scrolling() }

            // The gallery widget covers the page during playback;
            // the toolbar only belongs to the grid views.
            if view.mode() != FrameMode::SlideshowActive {
                Toolbar {
                    slideshow_enabled,
                    on_slideshow,
                    on_scroll_toggle,
                    on_save_cached,
                    on_clear,
                }
            }
        }
    }
}
