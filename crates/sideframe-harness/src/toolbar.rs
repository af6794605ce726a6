//! Recording toolbar double.

use std::sync::Mutex;

use sideframe::Toolbar;

/// One recorded toolbar invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCall {
    Open,
    ShowLoader,
    HideLoader,
    Lock(bool),
}

/// Toolbar double that records every call in invocation order.
#[derive(Debug, Default)]
pub struct RecordingToolbar {
    calls: Mutex<Vec<ToolbarCall>>,
}

impl RecordingToolbar {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<ToolbarCall> {
        self.lock().clone()
    }

    /// Drop the recorded calls.
    pub fn reset(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ToolbarCall>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: ToolbarCall) {
        self.lock().push(call);
    }
}

impl Toolbar for RecordingToolbar {
    fn open(&self) {
        self.record(ToolbarCall::Open);
    }

    fn show_loader(&self) {
        self.record(ToolbarCall::ShowLoader);
    }

    fn hide_loader(&self) {
        self.record(ToolbarCall::HideLoader);
    }

    fn lock(&self, locked: bool) {
        self.record(ToolbarCall::Lock(locked));
    }
}
