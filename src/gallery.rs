//! The gallery view: a masonry grid of the first N posts plus a "Load more"
//! button.
//!
//! ## Lifecycle
//!
//! A view is created with its posts, a [`RevealStore`] and, in interactive
//! contexts, a [`Viewport`]. Creation restores the remembered count.
//! [`Lifecycle::on_activate`] starts watching scroll,
//! [`Lifecycle::on_deactivate`] stops watching and saves the count.
//! Dropping an active view deactivates it, so teardown happens on every exit
//! path and the count is saved exactly once.
//!
//! ```text
//! new() ── load ──> on_activate() ── scroll/frame/load_more ──> on_deactivate() ── save
//!                                                                 (or Drop)
//! ```
//!
//! ## Load More
//!
//! The button shows only while the grid is not fully shown and scroll growth
//! is not yet armed. Pressing it grows the counter once and arms scroll
//! growth for the rest of the session, after which the button is gone.
//! A list no longer than the initial count never shows the button.

use maud::{Markup, html};

use crate::config::RevealConfig;
use crate::persistence::RevealStore;
use crate::reveal::{RevealCounter, RevealState};
use crate::scroll::{ScrollMetrics, ScrollWatcher, Viewport};
use crate::types::PostSummary;

/// Setup and teardown hooks driven by the host.
pub trait Lifecycle {
    fn on_activate(&mut self);
    fn on_deactivate(&mut self);
}

/// Viewport type for render contexts that have none.
///
/// Uninhabited: a view built with it can never activate scroll watching.
#[derive(Debug)]
pub enum NoViewport {}

impl Viewport for NoViewport {
    fn subscribe_scroll(&mut self) {
        match *self {}
    }

    fn unsubscribe_scroll(&mut self) {
        match *self {}
    }

    fn request_frame(&mut self) {
        match *self {}
    }

    fn metrics(&self) -> ScrollMetrics {
        match *self {}
    }
}

pub struct GalleryView<'a, V: Viewport> {
    posts: &'a [PostSummary],
    key: String,
    counter: RevealCounter,
    watcher: ScrollWatcher,
    viewport: Option<V>,
    store: &'a dyn RevealStore,
    torn_down: bool,
}

impl<'a> GalleryView<'a, NoViewport> {
    /// A view for a non-interactive render: starts from the store (if any)
    /// and never grows on scroll.
    pub fn headless(
        posts: &'a [PostSummary],
        key: impl Into<String>,
        config: &RevealConfig,
        store: &'a dyn RevealStore,
    ) -> Self {
        Self::new(posts, key, config, store, None)
    }
}

impl<'a, V: Viewport> GalleryView<'a, V> {
    /// Create a view, restoring the remembered count for `key`.
    ///
    /// `posts` must already be in display order.
    pub fn new(
        posts: &'a [PostSummary],
        key: impl Into<String>,
        config: &RevealConfig,
        store: &'a dyn RevealStore,
        viewport: Option<V>,
    ) -> Self {
        let key = key.into();
        let restored = store.load(&key);
        let counter = RevealCounter::new(config, restored);
        tracing::debug!(
            key = %key,
            restored = ?restored,
            visible_count = counter.visible_count(),
            "gallery view created"
        );
        Self {
            posts,
            key,
            counter,
            watcher: ScrollWatcher::new(config.threshold),
            viewport,
            store,
            torn_down: false,
        }
    }

    /// Create and activate in one step.
    pub fn mount(
        posts: &'a [PostSummary],
        key: impl Into<String>,
        config: &RevealConfig,
        store: &'a dyn RevealStore,
        viewport: Option<V>,
    ) -> Self {
        let mut view = Self::new(posts, key, config, store, viewport);
        view.on_activate();
        view
    }

    pub fn state(&self) -> RevealState {
        self.counter.state()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_active()
    }

    /// Posts currently shown: the first `visible_count`, clamped to the list.
    pub fn visible_posts(&self) -> &'a [PostSummary] {
        let n = self.counter.visible_count().min(self.posts.len());
        &self.posts[..n]
    }

    pub fn load_more_visible(&self) -> bool {
        load_more_visible(
            self.posts.len(),
            self.counter.state(),
            self.counter.initial_count(),
        )
    }

    /// "Load more" pressed. Returns `false` when the button isn't showing.
    pub fn load_more(&mut self) -> bool {
        if self.torn_down || !self.load_more_visible() {
            return false;
        }
        self.counter.grow();
        true
    }

    /// Scroll notification from the host.
    pub fn handle_scroll(&mut self) {
        if let Some(viewport) = self.viewport.as_mut() {
            self.watcher.on_scroll(viewport);
        }
    }

    /// Frame callback from the host. Returns `true` when the grid grew.
    pub fn handle_frame(&mut self) -> bool {
        let metrics = match &self.viewport {
            Some(viewport) => viewport.metrics(),
            None => return false,
        };
        self.watcher.on_frame(&metrics, &mut self.counter)
    }

    pub fn render(&self) -> Markup {
        render_gallery(
            self.posts,
            self.counter.state(),
            self.counter.initial_count(),
        )
    }
}

impl<V: Viewport> Lifecycle for GalleryView<'_, V> {
    fn on_activate(&mut self) {
        if self.torn_down {
            return;
        }
        match self.viewport.as_mut() {
            Some(viewport) => self.watcher.activate(viewport),
            None => tracing::debug!(key = %self.key, "no viewport, scroll growth disabled"),
        }
    }

    fn on_deactivate(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(viewport) = self.viewport.as_mut() {
            self.watcher.deactivate(viewport);
        }
        self.store.save(&self.key, self.counter.snapshot());
        self.torn_down = true;
    }
}

impl<V: Viewport> Drop for GalleryView<'_, V> {
    fn drop(&mut self) {
        self.on_deactivate();
    }
}

/// Whether the "Load more" button should show.
///
/// Hidden once the grid covers the whole list, once scroll growth is armed,
/// and always for lists no longer than the initial count.
pub fn load_more_visible(total: usize, state: RevealState, initial_count: usize) -> bool {
    total > initial_count && state.visible_count < total && !state.expanded
}

/// Render the grid for `state`. Pure: the same inputs give the same markup.
pub fn render_gallery(posts: &[PostSummary], state: RevealState, initial_count: usize) -> Markup {
    let shown = &posts[..state.visible_count.min(posts.len())];
    let show_button = load_more_visible(posts.len(), state, initial_count);

    html! {
        div.gallery data-visible=(shown.len()) data-total=(posts.len()) {
            div.masonry-grid {
                @for post in shown {
                    @let image = post.display_image();
                    div.grid-item data-id=(post.id) {
                        a href=(post.path) {
                            img src=(image.src)
                                srcset=[image.srcset.as_deref()]
                                width=[image.width]
                                height=[image.height]
                                alt=(post.title)
                                loading="lazy";
                        }
                    }
                }
            }
            @if show_button {
                button.load-more type="button" data-testid="load-more" { "Load more" }
            }
        }
    }
}
