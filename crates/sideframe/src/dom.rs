//! Headless model of the document loaded inside the frame.
//!
//! The controller's load-completion handler mutates the loaded document in
//! two ways: marker classes on the body, and retargeting of "view site"
//! links so they escape the frame instead of navigating inside it. Both are
//! modeled here on plain structs so the contract is observable without a
//! browser.

use std::collections::BTreeSet;

/// Marker class always added to the loaded body.
pub const CLASS_ADMIN: &str = "cms-admin";
/// Marker class always added to the loaded body.
pub const CLASS_ADMIN_SIDEFRAME: &str = "cms-admin-sideframe";
/// Marker class added to the loaded body when debug mode is on.
pub const CLASS_DEBUG: &str = "cms-debug";
/// Class identifying anchors whose navigation must escape the frame.
pub const CLASS_VIEW_SITE_LINK: &str = "viewsitelink";
/// Navigation target that breaks out of the frame.
pub const TARGET_TOP: &str = "_top";

/// An anchor element inside the loaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    /// The anchor's address.
    pub href: String,
    /// Navigation target attribute, if set.
    pub target: Option<String>,
    classes: BTreeSet<String>,
}

impl Anchor {
    /// Anchor pointing at `href`, with no classes and no target.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: None,
            classes: BTreeSet::new(),
        }
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    /// Whether the anchor carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// The document the frame finished loading.
///
/// `url` is the *final* address the document ended at, which may differ from
/// the requested one after redirects; it is what gets persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDocument {
    url: String,
    body_classes: BTreeSet<String>,
    anchors: Vec<Anchor>,
}

impl FrameDocument {
    /// Document that ended at the given address.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body_classes: BTreeSet::new(),
            anchors: Vec::new(),
        }
    }

    /// Add an anchor to the document.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    /// The final address the document ended at.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a class to the document body.
    pub fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_owned());
    }

    /// Whether the body carries the given class.
    #[must_use]
    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    /// The document's anchors.
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Rewrite every anchor carrying the `viewsitelink` class so its
    /// navigation target escapes the frame. Returns how many anchors were
    /// rewritten.
    pub fn retarget_view_site_links(&mut self) -> usize {
        let mut rewritten = 0;
        for anchor in &mut self.anchors {
            if anchor.has_class(CLASS_VIEW_SITE_LINK) {
                anchor.target = Some(TARGET_TOP.to_owned());
                rewritten += 1;
            }
        }
        rewritten
    }
}
