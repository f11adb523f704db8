//! Session-scoped memory of the last reveal count.
//!
//! Navigating away from the gallery and back should resume at the count the
//! visitor had expanded to, without writing anything durable. The store is
//! handed to each [`GalleryView`](crate::gallery::GalleryView) explicitly:
//! the view loads once when it is created and saves once when it is torn
//! down.
//!
//! Values are keyed by the gallery's canonical path. With a single gallery
//! this behaves exactly like one remembered integer.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage for the remembered reveal count.
///
/// Methods take `&self`: stores are shared by every view mounted during a
/// session, and the session is single-threaded.
pub trait RevealStore {
    /// Overwrite the remembered count for `key`.
    fn save(&self, key: &str, count: usize);
    /// The remembered count for `key`, or `None` to use the default.
    fn load(&self, key: &str) -> Option<usize>;
}

/// In-memory store living for the session (process) lifetime.
///
/// Dropping or [`clear`](SessionStore::clear)ing it models a full reload.
#[derive(Debug, Default)]
pub struct SessionStore {
    counts: RefCell<HashMap<String, usize>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.counts.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.counts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.borrow().is_empty()
    }
}

impl RevealStore for SessionStore {
    fn save(&self, key: &str, count: usize) {
        tracing::debug!(key, count, "saving reveal count");
        self.counts.borrow_mut().insert(key.to_string(), count);
    }

    fn load(&self, key: &str) -> Option<usize> {
        self.counts.borrow().get(key).copied()
    }
}

/// A store that remembers nothing. Used for static builds where there is no
/// session to resume.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStore;

impl RevealStore for NoStore {
    fn save(&self, _key: &str, _count: usize) {}

    fn load(&self, _key: &str) -> Option<usize> {
        None
    }
}
