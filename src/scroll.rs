//! Scroll watcher: grows the reveal counter when the visitor nears the
//! bottom of the page.
//!
//! ## Frame Throttling
//!
//! Scroll events can fire many times per rendered frame. The watcher never
//! evaluates inside the scroll handler; the first event of a frame sets a
//! pending flag and asks the host for a frame callback, and later events in
//! the same frame see the flag and do nothing. The frame callback evaluates
//! once and clears the flag.
//!
//! ```text
//! scroll ─┐
//! scroll ─┼─> pending = true, request_frame()   (once)
//! scroll ─┘
//! frame  ───> should_grow(metrics)? grow()      pending = false
//! ```
//!
//! ## Arming
//!
//! Scrolling alone never grows a fresh gallery. Growth is armed once the
//! counter is `expanded`, i.e. after the visitor used "Load more" or the
//! view was restored from an already-expanded session.
//!
//! The decision itself is [`should_grow`], a pure function of the metrics,
//! so it can be tested without a viewport.

use crate::reveal::RevealCounter;

/// Scroll position and sizes, in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Full height of the document.
    pub document_height: f64,
    /// Current vertical scroll offset.
    pub scroll_offset: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Remaining distance between the viewport's bottom edge and the end of
    /// the document. Negative when overscrolled.
    pub fn distance_to_bottom(&self) -> f64 {
        self.document_height - (self.scroll_offset + self.viewport_height)
    }
}

/// Whether a frame evaluation should grow the counter.
pub fn should_grow(metrics: &ScrollMetrics, expanded: bool, threshold: f64) -> bool {
    expanded && metrics.distance_to_bottom() < threshold
}

/// What the hosting environment provides to an interactive gallery.
///
/// A non-interactive render context has no viewport at all; the view is then
/// activated with `None` and stays at its starting count.
pub trait Viewport {
    /// Start delivering scroll notifications to the view.
    fn subscribe_scroll(&mut self);
    /// Stop delivering scroll notifications.
    fn unsubscribe_scroll(&mut self);
    /// Schedule one frame callback before the next repaint.
    fn request_frame(&mut self);
    /// Current scroll metrics.
    fn metrics(&self) -> ScrollMetrics;
}

#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    threshold: f64,
    active: bool,
    pending: bool,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: false,
            pending: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn activate(&mut self, viewport: &mut dyn Viewport) {
        if self.active {
            return;
        }
        viewport.subscribe_scroll();
        self.active = true;
        self.pending = false;
    }

    pub fn deactivate(&mut self, viewport: &mut dyn Viewport) {
        if !self.active {
            return;
        }
        viewport.unsubscribe_scroll();
        self.active = false;
        self.pending = false;
    }

    /// Scroll notification. Requests at most one frame per pending period.
    pub fn on_scroll(&mut self, viewport: &mut dyn Viewport) {
        if !self.active || self.pending {
            return;
        }
        self.pending = true;
        viewport.request_frame();
    }

    /// Frame callback. Returns `true` when the counter grew.
    ///
    /// A callback arriving after deactivation is ignored.
    pub fn on_frame(&mut self, metrics: &ScrollMetrics, counter: &mut RevealCounter) -> bool {
        if !self.active || !self.pending {
            return false;
        }
        self.pending = false;
        if should_grow(metrics, counter.expanded(), self.threshold) {
            tracing::debug!(
                distance = metrics.distance_to_bottom(),
                "near bottom, growing"
            );
            counter.grow();
            true
        } else {
            false
        }
    }
}
