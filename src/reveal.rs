//! Reveal counter: how many posts the gallery currently shows.
//!
//! The counter starts at the configured initial count (20 by default) or at
//! a count restored from the session store. It only ever grows while a view
//! is mounted. `expanded` records that growth beyond the initial count has
//! happened at least once; scroll-driven growth is only armed once it is set.

use crate::config::RevealConfig;

/// Snapshot of the counter's two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    pub visible_count: usize,
    pub expanded: bool,
}

#[derive(Debug, Clone)]
pub struct RevealCounter {
    state: RevealState,
    initial_count: usize,
    step: usize,
}

impl RevealCounter {
    /// Create a counter, resuming from `restored` when the session has one.
    ///
    /// `expanded` is derived from the starting count: a restored count above
    /// the initial default means the user had already asked for more.
    pub fn new(config: &RevealConfig, restored: Option<usize>) -> Self {
        let visible_count = restored.unwrap_or(config.initial_count);
        Self {
            state: RevealState {
                visible_count,
                expanded: visible_count > config.initial_count,
            },
            initial_count: config.initial_count,
            step: config.step,
        }
    }

    /// Grow by the configured step.
    pub fn grow(&mut self) {
        self.grow_by(self.step);
    }

    /// Grow by `step` items and mark the counter expanded.
    ///
    /// Never fails; growing past the end of the list is harmless because
    /// rendering clamps to the list length.
    pub fn grow_by(&mut self, step: usize) {
        self.state.visible_count = self.state.visible_count.saturating_add(step);
        self.state.expanded = true;
        tracing::debug!(
            visible_count = self.state.visible_count,
            step,
            "reveal count grew"
        );
    }

    /// Current count, for persisting on teardown.
    pub fn snapshot(&self) -> usize {
        self.state.visible_count
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn visible_count(&self) -> usize {
        self.state.visible_count
    }

    pub fn expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    pub fn step(&self) -> usize {
        self.step
    }
}
