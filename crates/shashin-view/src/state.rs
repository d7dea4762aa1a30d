//! Frame view state and its lifecycle.
//!
//! [`ViewState`] owns everything the renderer needs: the loaded
//! items, the opaque source descriptor, the display-order
//! permutation, the loading flag, the scroll flag, and the UI mode.
//! Mutation goes through the lifecycle operations (`on_load_started`,
//! `on_queue_loaded`, `on_load_failed`, `on_clear`, `shuffle`,
//! `toggle_scroll`, `on_slideshow_started`, `on_gallery_closed`);
//! rendering reads back an immutable [`GridModel`] via
//! [`ViewState::grid`].

use rand::Rng;
use serde_json::Value;

use crate::grid::{GridModel, build_grid};
use crate::shuffle;
use crate::types::{FrameConfig, MediaItem, QueueResponse};

/// UI mode of the frame.
///
/// `Idle` covers both "nothing selected yet" and "selection was
/// empty" -- the grid model distinguishes the two through its
/// description panel. Only an explicit clear leads back to `Idle`
/// from the other modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMode {
    /// No items to show.
    Idle,
    /// Grid shown with deferred thumbnail loading.
    GridLazy,
    /// The gallery widget is driving a full-screen slideshow.
    SlideshowActive,
}

/// Which page context the frame was loaded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationContext {
    /// The regular grid view: thumbnails load lazily.
    Grid,
    /// The slideshow view: the gallery starts immediately and
    /// thumbnails are not deferred.
    Slideshow,
}

impl PresentationContext {
    /// Derive the context from the page location.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        if href.contains("slideshow") {
            Self::Slideshow
        } else {
            Self::Grid
        }
    }
}

/// Mutable state of the photo frame view.
#[derive(Debug, Clone)]
pub struct ViewState {
    config: FrameConfig,
    source: Option<Value>,
    items: Vec<MediaItem>,
    display_order: Vec<usize>,
    mode: FrameMode,
    loading: bool,
    scrolling: bool,
}

impl ViewState {
    /// Create a cleared view state.
    #[must_use]
    pub const fn new(config: FrameConfig) -> Self {
        Self {
            config,
            source: None,
            items: Vec::new(),
            display_order: Vec::new(),
            mode: FrameMode::Idle,
            loading: false,
            scrolling: false,
        }
    }

    /// The frame configuration this state was created with.
    #[must_use]
    pub const fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Current UI mode.
    #[must_use]
    pub const fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Whether a queue fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the grid container is in scrolling mode.
    #[must_use]
    pub const fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Number of loaded items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Mark a queue fetch as in flight.
    pub const fn on_load_started(&mut self) {
        self.loading = true;
    }

    /// Accept a freshly loaded queue and dismiss the loading flag.
    ///
    /// Stores the source and items, resets the display order to
    /// input order, and moves to the mode the context and item
    /// count dictate. An empty selection stays `Idle` -- the grid
    /// still shows its description panel so the user sees that the
    /// search matched nothing.
    pub fn on_queue_loaded(&mut self, response: QueueResponse, context: PresentationContext) {
        self.loading = false;
        self.source = Some(response.parameters);
        self.items = response.photos;
        self.display_order = shuffle::identity_order(self.items.len());
        self.mode = if self.items.is_empty() {
            FrameMode::Idle
        } else {
            match context {
                PresentationContext::Grid => FrameMode::GridLazy,
                PresentationContext::Slideshow => FrameMode::SlideshowActive,
            }
        };
    }

    /// Record a failed queue fetch.
    ///
    /// Dismisses the loading flag and nothing else: the source,
    /// items, order, and mode all stay exactly as they were before
    /// the call, so a failed reload never blanks a populated grid.
    pub const fn on_load_failed(&mut self) {
        self.loading = false;
    }

    /// Reset to the empty state, equivalent to rendering `(null, null)`.
    ///
    /// The scroll flag is a property of the grid container, not of
    /// the loaded selection, and survives a clear.
    pub fn on_clear(&mut self) {
        self.source = None;
        self.items.clear();
        self.display_order.clear();
        self.mode = FrameMode::Idle;
    }

    /// Randomize the display order in place.
    ///
    /// Operates purely on presentation order; the underlying item
    /// sequence is untouched, and the next `on_queue_loaded` resets
    /// the order to input order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle::shuffle(&mut self.display_order, rng);
    }

    /// Toggle the grid container's scrolling mode.
    pub const fn toggle_scroll(&mut self) {
        self.scrolling = !self.scrolling;
    }

    /// Enter full-screen playback.
    ///
    /// The toolbar is hidden while the gallery is open; a no-op when
    /// there are no items to play.
    pub fn on_slideshow_started(&mut self) {
        if !self.items.is_empty() {
            self.mode = FrameMode::SlideshowActive;
        }
    }

    /// Leave full-screen playback and return to the lazy grid.
    ///
    /// Only meaningful from `SlideshowActive`; closing the gallery
    /// over an already-visible grid changes nothing.
    pub const fn on_gallery_closed(&mut self) {
        if matches!(self.mode, FrameMode::SlideshowActive) {
            self.mode = FrameMode::GridLazy;
        }
    }

    /// Build the grid model for the current state, applying the
    /// display order.
    #[must_use]
    pub fn grid(&self) -> GridModel {
        let Some(source) = self.source.as_ref() else {
            return build_grid(None, None, &self.config);
        };
        let ordered: Vec<&MediaItem> = self
            .display_order
            .iter()
            .filter_map(|&index| self.items.get(index))
            .collect();
        build_grid(Some(source), Some(&ordered), &self.config)
    }
}
