//! Namespaced touch-scroll prevention on the host document.
//!
//! Multiple overlays may prevent scrolling at once; each registers under its
//! own tag and scrolling resumes only when every tag has been released. The
//! sideframe registers under [`SCROLL_NAMESPACE`].

use std::collections::BTreeSet;

/// Tag the sideframe registers its scroll prevention under.
pub const SCROLL_NAMESPACE: &str = "sideframe";

/// Registry of scroll-prevention tags on the host document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    tags: BTreeSet<String>,
}

impl ScrollLock {
    /// Empty registry: scrolling allowed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent touch scrolling under the given tag. Returns `true` when the
    /// tag was newly registered.
    pub fn prevent(&mut self, tag: &str) -> bool {
        self.tags.insert(tag.to_owned())
    }

    /// Release the given tag. Returns `true` when the tag was registered.
    pub fn allow(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Whether any tag currently prevents scrolling.
    #[must_use]
    pub fn is_prevented(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Whether the given tag is registered.
    #[must_use]
    pub fn is_prevented_by(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
