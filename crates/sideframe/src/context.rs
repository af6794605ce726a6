//! Explicit collaborator context.
//!
//! Every collaborator (config, settings store, toolbar) is injected at
//! construction rather than reached through ambient singletons, so the
//! controller has no implicit environment coupling and tests can substitute
//! doubles freely.

use std::fmt;
use std::sync::Arc;

use sideframe_core::RequestContext;

use crate::settings::SettingsStore;
use crate::toolbar::Toolbar;
use crate::view::Viewport;

/// Read-only host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Ambient request context consumed by the URL builder.
    pub request: RequestContext,
    /// Debug mode; adds the debug marker class to loaded documents.
    pub debug: bool,
}

/// Everything the controller needs from its environment.
#[derive(Clone)]
pub struct Context {
    /// The host page's toolbar chrome.
    pub toolbar: Arc<dyn Toolbar>,
    /// Persisted settings store (the `sideframe` namespace).
    pub settings: Arc<dyn SettingsStore>,
    /// Read-only host configuration.
    pub config: Config,
    /// Hosting viewport dimensions and capabilities.
    pub viewport: Viewport,
}

impl Context {
    /// Bundle the collaborators.
    #[must_use]
    pub fn new(
        toolbar: Arc<dyn Toolbar>,
        settings: Arc<dyn SettingsStore>,
        config: Config,
        viewport: Viewport,
    ) -> Self {
        Self {
            toolbar,
            settings,
            config,
            viewport,
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("settings", &self.settings.name())
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
