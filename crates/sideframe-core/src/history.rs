//! Per-session back/forward navigation ledger.
//!
//! The history is session-scoped, not a durable log: the controller resets it
//! on every `open()`, so entries never survive a fresh open even across the
//! same URL.
//!
//! Stack discipline:
//! - recording a visit pushes onto `back` and clears `forward`;
//! - going back pops `back`, parks the current entry on `forward`, and
//!   returns the popped entry to load;
//! - going forward is the mirror operation.

use std::fmt;

/// One visited address inside the frame. The URL is opaque to the history;
/// no normalization or validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavEntry(String);

impl NavEntry {
    /// Create an entry from any URL-like string.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The recorded address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the entry, yielding the address.
    #[must_use]
    pub fn into_url(self) -> String {
        self.0
    }
}

impl From<&str> for NavEntry {
    fn from(url: &str) -> Self {
        Self(url.to_owned())
    }
}

impl From<String> for NavEntry {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl fmt::Display for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Back/forward stacks for one open session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    back: Vec<NavEntry>,
    forward: Vec<NavEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited entry: push onto `back` and discard the entire
    /// `forward` stack. Called with the entry being *left*, not the one
    /// being navigated to.
    pub fn record(&mut self, entry: NavEntry) {
        self.back.push(entry);
        self.forward.clear();
    }

    /// Navigate back: pop the top of `back`, park `current` on `forward`,
    /// and return the entry the caller must now load. `None` when the back
    /// stack is empty (no state is changed in that case).
    pub fn pop_back(&mut self, current: NavEntry) -> Option<NavEntry> {
        let entry = self.back.pop()?;
        self.forward.push(current);
        Some(entry)
    }

    /// Navigate forward: mirror of [`pop_back`](Self::pop_back).
    pub fn pop_forward(&mut self, current: NavEntry) -> Option<NavEntry> {
        let entry = self.forward.pop()?;
        self.back.push(current);
        Some(entry)
    }

    /// Drop both stacks. Invoked unconditionally on every open.
    pub fn reset(&mut self) {
        self.back.clear();
        self.forward.clear();
    }

    /// Entries behind the current one, oldest first.
    #[must_use]
    pub fn back(&self) -> &[NavEntry] {
        &self.back
    }

    /// Entries ahead of the current one, oldest first.
    #[must_use]
    pub fn forward(&self) -> &[NavEntry] {
        &self.forward
    }

    /// Whether a back navigation is possible.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Whether a forward navigation is possible.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// True when both stacks are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.back.is_empty() && self.forward.is_empty()
    }
}
