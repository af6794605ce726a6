//! Toolbar collaborator surface.
//!
//! The toolbar is external: the controller calls it exactly as the open/close
//! contract prescribes and consumes no return values.

/// Host-page toolbar chrome.
///
/// Methods take `&self`; implementations that track state use interior
/// mutability so the controller can hold the collaborator behind an `Arc`.
pub trait Toolbar: Send + Sync {
    /// Open the toolbar chrome.
    fn open(&self);
    /// Show the toolbar's loading indicator.
    fn show_loader(&self);
    /// Hide the toolbar's loading indicator.
    fn hide_loader(&self);
    /// Lock or unlock toolbar interaction while a load is in flight.
    fn lock(&self, locked: bool);
}

/// A toolbar that ignores every call. Useful when the host page carries no
/// toolbar chrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullToolbar;

impl Toolbar for NullToolbar {
    fn open(&self) {}
    fn show_loader(&self) {}
    fn hide_loader(&self) {}
    fn lock(&self, _locked: bool) {}
}
