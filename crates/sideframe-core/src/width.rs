//! Target panel width resolution.
//!
//! Priority order:
//! 1. a persisted `position` is returned unchanged, in pixels;
//! 2. a container narrower than the mobile breakpoint gets the full viewport
//!    width (the panel occupies the whole screen on small devices);
//! 3. otherwise the configured fraction of the container, rendered as a
//!    percentage.

use std::fmt;

/// Viewport width below which the layout is considered mobile.
pub const BREAKPOINT_MOBILE: f64 = 768.0;

/// A resolved target width for the frame container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedWidth {
    /// Absolute width in pixels.
    Pixels(f64),
    /// Fraction of the container width, in `(0, 1]`.
    Percent(f64),
}

impl ResolvedWidth {
    /// The concrete pixel width this target occupies inside a container of
    /// the given width. Used when persisting the applied width.
    #[must_use]
    pub fn pixels_in(self, container_width: f64) -> f64 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(fraction) => fraction * container_width,
        }
    }
}

impl fmt::Display for ResolvedWidth {
    /// `Pixels(200.0)` renders as `200`, `Percent(0.8)` as `80%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}"),
            Self::Percent(fraction) => {
                // Rounded to one decimal place to keep 0.8 printing as 80
                // rather than 80.00000000000001.
                let pct = (fraction * 1000.0).round() / 10.0;
                write!(f, "{pct}%")
            }
        }
    }
}

/// Inputs to a single width resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidthInputs {
    /// Current rendered width of the host container (the page body).
    pub container_width: f64,
    /// Inner width of the viewport.
    pub viewport_width: f64,
    /// Configured `sideframe_width` fraction in `(0, 1]`.
    pub fraction: f64,
    /// Remembered width from the settings store, if any.
    pub persisted_position: Option<f64>,
}

/// Computes target panel widths. The breakpoint is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthResolver {
    breakpoint: f64,
}

impl Default for WidthResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthResolver {
    /// Resolver with the standard mobile breakpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            breakpoint: BREAKPOINT_MOBILE,
        }
    }

    /// Override the breakpoint.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: f64) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// The configured breakpoint.
    #[must_use]
    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    /// Resolve the target width. A persisted position takes absolute
    /// priority, independent of the breakpoint.
    #[must_use]
    pub fn resolve(&self, inputs: WidthInputs) -> ResolvedWidth {
        if let Some(position) = inputs.persisted_position {
            return ResolvedWidth::Pixels(position);
        }
        if inputs.container_width < self.breakpoint {
            return ResolvedWidth::Pixels(inputs.viewport_width);
        }
        ResolvedWidth::Percent(inputs.fraction)
    }
}
