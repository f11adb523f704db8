//! Shared test utilities: post fixtures and a viewport that records what the
//! gallery asked of it.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let posts = make_posts(45);
//! let vp = RecordingViewport::new(ScrollMetrics::default());
//! let probe = vp.clone();
//! // hand `vp` to a view, inspect `probe` afterwards
//! assert_eq!(probe.frames_requested(), 0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::{ScrollMetrics, Viewport};
use crate::types::{ImageRef, PostSummary};

// =========================================================================
// Post fixtures
// =========================================================================

/// `n` posts, newest first, dated one day apart. Every third post has no
/// thumbnail.
pub fn make_posts(n: usize) -> Vec<PostSummary> {
    (0..n)
        .map(|i| PostSummary {
            id: format!("post-{i}"),
            path: format!("/tiny-paintings/{i}/"),
            title: format!("Painting {i}"),
            date: format!("2019-{:02}-{:02}", 12 - (i / 28) % 12, 28 - i % 28),
            categories: vec!["tiny-paintings".to_string()],
            image: ImageRef::new(format!("/images/{i}.jpg")),
            thumbnail: (i % 3 != 0).then(|| ImageRef::new(format!("/images/{i}-thumb.jpg"))),
        })
        .collect()
}

/// Number of grid items in rendered gallery HTML.
pub fn count_items(html: &str) -> usize {
    html.matches("class=\"grid-item\"").count()
}

// =========================================================================
// Recording viewport
// =========================================================================

#[derive(Debug, Default)]
struct ViewportLog {
    metrics: ScrollMetrics,
    subscribed: bool,
    subscriptions: usize,
    unsubscriptions: usize,
    frames_requested: usize,
}

/// A fake viewport. Clones share one log, so a test can keep a probe while
/// the view owns the original.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    log: Rc<RefCell<ViewportLog>>,
}

impl RecordingViewport {
    pub fn new(metrics: ScrollMetrics) -> Self {
        let vp = Self::default();
        vp.set_metrics(metrics);
        vp
    }

    pub fn set_metrics(&self, metrics: ScrollMetrics) {
        self.log.borrow_mut().metrics = metrics;
    }

    pub fn is_subscribed(&self) -> bool {
        self.log.borrow().subscribed
    }

    pub fn subscriptions(&self) -> usize {
        self.log.borrow().subscriptions
    }

    pub fn unsubscriptions(&self) -> usize {
        self.log.borrow().unsubscriptions
    }

    pub fn frames_requested(&self) -> usize {
        self.log.borrow().frames_requested
    }
}

impl Viewport for RecordingViewport {
    fn subscribe_scroll(&mut self) {
        let mut log = self.log.borrow_mut();
        log.subscribed = true;
        log.subscriptions += 1;
    }

    fn unsubscribe_scroll(&mut self) {
        let mut log = self.log.borrow_mut();
        log.subscribed = false;
        log.unsubscriptions += 1;
    }

    fn request_frame(&mut self) {
        self.log.borrow_mut().frames_requested += 1;
    }

    fn metrics(&self) -> ScrollMetrics {
        self.log.borrow().metrics
    }
}

/// Metrics 50px from the bottom of a 2000px document.
pub fn near_bottom() -> ScrollMetrics {
    ScrollMetrics {
        document_height: 2000.0,
        scroll_offset: 1150.0,
        viewport_height: 800.0,
    }
}

/// Metrics at the top of a 2000px document.
pub fn at_top() -> ScrollMetrics {
    ScrollMetrics {
        document_height: 2000.0,
        scroll_offset: 0.0,
        viewport_height: 800.0,
    }
}
