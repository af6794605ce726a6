//! View handles for the sideframe's DOM regions.
//!
//! Instead of a loose lookup table of DOM elements, the view is an explicit
//! struct populated once at construction, exposing only the named regions
//! the controller needs. Every handle records the state the controller
//! would have written to the DOM (visibility, classes, widths, animation
//! requests), so the open/close contract is observable by tests.

use std::collections::BTreeSet;

use sideframe_core::ResolvedWidth;
use web_time::Duration;

use crate::dom::FrameDocument;
use crate::scroll::ScrollLock;

/// Class on the frame container while a load is in flight.
pub const CLASS_LOADER: &str = "cms-loader";
/// Class on the host body while touch scrolling is prevented.
pub const CLASS_PREVENT_SCROLLING: &str = "cms-prevent-scrolling";

/// Dimensions and input capabilities of the hosting viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Inner width of the viewport in pixels.
    pub width: f64,
    /// Whether the viewport indicates a touch/mobile context.
    pub touch: bool,
}

/// A show/hide region (dimmer, resize handle, shim).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    visible: bool,
}

impl Region {
    /// Make the region visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the region.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Current visibility.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A history navigation button; disabled while its stack is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryButton {
    enabled: bool,
}

impl HistoryButton {
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the button is currently actionable.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// One recorded width animation on the frame container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRecord {
    /// Width the container was animated to.
    pub width: ResolvedWidth,
    /// Requested animation duration.
    pub duration: Duration,
}

/// The embedded frame element.
///
/// Hidden until its load completes; the loaded document is attached by the
/// completion handler.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameElement {
    url: String,
    generation: u64,
    visible: bool,
    document: Option<FrameDocument>,
}

impl FrameElement {
    pub(crate) fn new(url: String, generation: u64) -> Self {
        Self {
            url,
            generation,
            visible: false,
            document: None,
        }
    }

    /// The address the frame points at.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
    }

    /// Generation tag matching this frame's load token.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Frames stay hidden until their load completes.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn reveal(&mut self) {
        self.visible = true;
    }

    /// The loaded document, once the load has completed.
    #[must_use]
    pub fn document(&self) -> Option<&FrameDocument> {
        self.document.as_ref()
    }

    pub(crate) fn set_document(&mut self, document: FrameDocument) {
        self.document = Some(document);
    }
}

/// The container the frame element lives in.
///
/// Holds at most one frame; attaching discards the previous subtree, which
/// is what invalidates a superseded frame's load token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameContainer {
    classes: BTreeSet<String>,
    width: Option<ResolvedWidth>,
    animations: Vec<AnimationRecord>,
    frame: Option<FrameElement>,
}

impl FrameContainer {
    /// Add a class to the container.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    /// Remove a class from the container.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Whether the container carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// The currently applied width, if one has been set.
    #[must_use]
    pub fn width(&self) -> Option<ResolvedWidth> {
        self.width
    }

    /// Apply a width immediately, without animation.
    pub fn set_width(&mut self, width: ResolvedWidth) {
        self.width = Some(width);
    }

    /// Animate to a width, recording the request.
    pub fn animate_to(&mut self, width: ResolvedWidth, duration: Duration) {
        self.animations.push(AnimationRecord { width, duration });
        self.width = Some(width);
    }

    /// Every animation requested so far, oldest first.
    #[must_use]
    pub fn animations(&self) -> &[AnimationRecord] {
        &self.animations
    }

    /// Remove the current frame subtree. Returns `true` when a frame was
    /// present.
    pub fn clear(&mut self) -> bool {
        self.frame.take().is_some()
    }

    /// Insert a frame into the (empty) container.
    pub(crate) fn attach(&mut self, frame: FrameElement) {
        self.frame = Some(frame);
    }

    /// The live frame, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&FrameElement> {
        self.frame.as_ref()
    }

    pub(crate) fn frame_mut(&mut self) -> Option<&mut FrameElement> {
        self.frame.as_mut()
    }
}

/// The page hosting the sideframe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostPage {
    width: f64,
    body_classes: BTreeSet<String>,
    /// Touch-scroll prevention registry for the host document.
    pub scroll: ScrollLock,
    reload_requested: bool,
}

impl HostPage {
    /// Current rendered width of the host body.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Update the host body width (e.g. after a window resize).
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Add a class to the host body.
    pub fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_owned());
    }

    /// Remove a class from the host body.
    pub fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    /// Whether the host body carries the given class.
    #[must_use]
    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub(crate) fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Whether closing the panel asked the host page to reload.
    #[must_use]
    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }
}

/// All DOM regions the controller touches, populated once at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideframeView {
    /// Semi-opaque backdrop behind the panel.
    pub dimmer: Region,
    /// Container the frame element is injected into.
    pub container: FrameContainer,
    /// Drag handle for manual resizing.
    pub resize: Region,
    /// Back navigation button.
    pub history_back: HistoryButton,
    /// Forward navigation button.
    pub history_forward: HistoryButton,
    /// Shim capturing pointer events during drags.
    pub shim: Region,
    /// The hosting page.
    pub host: HostPage,
}
