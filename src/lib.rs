//! # Masonry Gal
//!
//! A single gallery page for a static-site blog: a masonry grid of image
//! posts that shows a first batch and reveals more as the visitor scrolls.
//!
//! # How Reveal Works
//!
//! ```text
//! posts ──> GalleryView ──render──> grid of first N + "Load more"
//!               ▲   │
//!      grow()   │   └── on_deactivate: save N ──> RevealStore
//!               │                                    │
//!        RevealCounter <── restore N on new() ───────┘
//!               ▲
//!        ScrollWatcher <── scroll / frame callbacks from the Viewport
//! ```
//!
//! - A fresh view shows 20 posts and a "Load more" button.
//! - Pressing the button adds 20 and arms scroll growth: from then on, each
//!   rendered frame that finds the viewport within 100px of the bottom adds
//!   another 20.
//! - When the view is torn down the count goes into a session store, so
//!   navigating away and back resumes at the same place.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | The counter: visible count and whether growth is armed |
//! | [`scroll`] | Frame-throttled scroll watching and the pure growth decision |
//! | [`persistence`] | Session-scoped storage of the last count |
//! | [`gallery`] | The view: lifecycle, "Load more", grid rendering with Maud |
//! | [`source`] | Posts manifest loading, category filter, newest-first order |
//! | [`generate`] | Full static page written to disk |
//! | [`config`] | TOML config: stock defaults, merging, validation, CSS |
//! | [`types`] | Shared types (`PostSummary`, `ImageRef`, `PageMeta`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Headless Core
//!
//! Nothing in [`reveal`], [`scroll`] or [`persistence`] knows about a DOM.
//! The host environment is a [`scroll::Viewport`]: subscribe/unsubscribe,
//! request a frame, read metrics. A static build simply has no viewport and
//! renders the initial count.
//!
//! ## Explicit Session Store
//!
//! The remembered count lives in a [`persistence::RevealStore`] handed to
//! each view rather than in ambient global state, so the dependency shows up
//! in the view's signature and tests can inspect it directly.
//!
//! ## Teardown on Drop
//!
//! Views deactivate in `Drop` as well as on explicit
//! [`gallery::Lifecycle::on_deactivate`], so the scroll subscription is
//! always released and the count always saved, exactly once.

pub mod config;
pub mod gallery;
pub mod generate;
pub mod output;
pub mod persistence;
pub mod reveal;
pub mod scroll;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
