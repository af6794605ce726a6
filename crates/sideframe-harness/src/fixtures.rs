//! Canned documents resembling the administrative pages the panel loads.

use sideframe::{Anchor, FrameDocument};

/// A typical admin URL to open the panel at.
pub const ADMIN_URL: &str = "/admin/cms/page/";

/// Document with one "view site" link and one ordinary link, ending at the
/// given address.
#[must_use]
pub fn admin_document(url: &str) -> FrameDocument {
    FrameDocument::new(url)
        .with_anchor(Anchor::new("/").with_class("viewsitelink"))
        .with_anchor(Anchor::new("/admin/cms/page/2/"))
}

/// Document with no anchors at all.
#[must_use]
pub fn bare_document(url: &str) -> FrameDocument {
    FrameDocument::new(url)
}
