//! Pre-wired controller for integration tests.

use std::sync::Arc;

use sideframe::{
    Config, Context, MemorySettings, Options, Sideframe, SideframeSettings, Viewport,
};
use sideframe_core::BREAKPOINT_MOBILE;

use crate::toolbar::RecordingToolbar;

/// A controller wired to recording collaborators.
///
/// Defaults: desktop viewport (1024 px wide, no touch), host body just above
/// the mobile breakpoint, empty settings, default options.
pub struct TestRig {
    /// The recording toolbar double behind the controller's context.
    pub toolbar: Arc<RecordingToolbar>,
    /// The in-memory settings store behind the controller's context.
    pub settings: Arc<MemorySettings>,
    /// The controller under test.
    pub sideframe: Sideframe,
}

impl TestRig {
    /// Rig with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start customizing a rig.
    #[must_use]
    pub fn builder() -> TestRigBuilder {
        TestRigBuilder::default()
    }
}

impl Default for TestRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TestRig`].
pub struct TestRigBuilder {
    config: Config,
    viewport: Viewport,
    container_width: f64,
    options: Options,
    initial_settings: SideframeSettings,
}

impl Default for TestRigBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            viewport: Viewport {
                width: 1024.0,
                touch: false,
            },
            container_width: BREAKPOINT_MOBILE + 10.0,
            options: Options::default(),
            initial_settings: SideframeSettings::default(),
        }
    }
}

impl TestRigBuilder {
    /// Replace the host configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the viewport.
    #[must_use]
    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the host body width.
    #[must_use]
    pub fn container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    /// Replace the controller options.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Pre-seed the settings store.
    #[must_use]
    pub fn settings(mut self, settings: SideframeSettings) -> Self {
        self.initial_settings = settings;
        self
    }

    /// Wire everything up.
    #[must_use]
    pub fn build(self) -> TestRig {
        let toolbar = Arc::new(RecordingToolbar::new());
        let settings = Arc::new(MemorySettings::with_settings(self.initial_settings));
        let ctx = Context::new(
            toolbar.clone(),
            settings.clone(),
            self.config,
            self.viewport,
        );
        let mut sideframe = Sideframe::new(ctx, self.options);
        sideframe.view_mut().host.set_width(self.container_width);
        TestRig {
            toolbar,
            settings,
            sideframe,
        }
    }
}
