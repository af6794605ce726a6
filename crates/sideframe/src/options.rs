//! Construction options and the `open()` parameter shape.

use std::collections::BTreeMap;
use std::fmt;

use web_time::Duration;

/// Callback invoked when the panel closes.
pub type OnClose = Box<dyn FnMut() + Send>;

/// Policy deciding whether closing the panel must reload the host page.
///
/// The criterion is an explicit policy chosen at construction; there is no
/// implicit detection of content changes inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Never reload the host page on close.
    #[default]
    Never,
    /// Reload when the session's last loaded address differs from the first
    /// address loaded in that session, i.e. the user navigated inside the
    /// frame.
    UrlChanged,
}

/// A caller-supplied option value the controller does not interpret.
///
/// Unknown keys arrive with arbitrary value shapes; they are carried
/// verbatim, not coerced to strings.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Controller options, shallow-merged over defaults at construction.
///
/// Unknown keys supplied by the caller are preserved verbatim in
/// [`extra`](Self::extra); the options object is a superset merge, not a
/// filtered one.
pub struct Options {
    /// Close callback; `None` corresponds to the unset default.
    pub on_close: Option<OnClose>,
    /// Width animation duration.
    pub sideframe_duration: Duration,
    /// Default panel width as a fraction of the container, in `(0, 1]`.
    pub sideframe_width: f64,
    /// Close-time reload policy.
    pub reload_policy: ReloadPolicy,
    /// Caller-supplied keys the controller does not interpret.
    pub extra: BTreeMap<String, OptionValue>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            on_close: None,
            sideframe_duration: Duration::from_millis(300),
            sideframe_width: 0.8,
            reload_policy: ReloadPolicy::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Options with the standard defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the close callback.
    #[must_use]
    pub fn with_on_close(mut self, on_close: OnClose) -> Self {
        self.on_close = Some(on_close);
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.sideframe_duration = duration;
        self
    }

    /// Set the default width fraction.
    #[must_use]
    pub fn with_width(mut self, fraction: f64) -> Self {
        self.sideframe_width = fraction;
        self
    }

    /// Set the reload policy.
    #[must_use]
    pub fn with_reload_policy(mut self, policy: ReloadPolicy) -> Self {
        self.reload_policy = policy;
        self
    }

    /// Preserve a key the controller does not interpret.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("on_close", &self.on_close.is_some())
            .field("sideframe_duration", &self.sideframe_duration)
            .field("sideframe_width", &self.sideframe_width)
            .field("reload_policy", &self.reload_policy)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Arguments to [`Sideframe::open`](crate::Sideframe::open).
///
/// The URL is optional by design: the only validated failure mode is a
/// missing or empty URL, which the controller rejects with
/// [`SideframeError::InvalidArgument`](crate::SideframeError::InvalidArgument).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenParams {
    /// Address to load inside the frame. Not validated beyond non-emptiness.
    pub url: Option<String>,
    /// Animate the width change instead of applying it immediately.
    pub animate: bool,
}

impl OpenParams {
    /// Parameters for the given URL, without animation.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            animate: false,
        }
    }

    /// Request an animated width change.
    #[must_use]
    pub fn animated(mut self) -> Self {
        self.animate = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let options = Options::default();
        assert!(options.on_close.is_none());
        assert_eq!(options.sideframe_duration, Duration::from_millis(300));
        assert_eq!(options.sideframe_width, 0.8);
        assert_eq!(options.reload_policy, ReloadPolicy::Never);
        assert!(options.extra.is_empty());
    }

    #[test]
    fn merge_is_a_superset() {
        let options = Options::new()
            .with_duration(Duration::from_millis(310))
            .with_width(0.9)
            .with_extra("something", "else");
        assert_eq!(options.sideframe_duration, Duration::from_millis(310));
        assert_eq!(options.sideframe_width, 0.9);
        assert_eq!(
            options.extra.get("something"),
            Some(&OptionValue::Text("else".into()))
        );
        // Untouched keys keep their defaults.
        assert!(options.on_close.is_none());
    }

    #[test]
    fn extra_values_of_any_shape_are_preserved() {
        let options = Options::new()
            .with_extra("label", "else")
            .with_extra("flagged", true)
            .with_extra("attempts", 3i64)
            .with_extra("ratio", 0.5f64);
        assert_eq!(
            options.extra.get("label"),
            Some(&OptionValue::Text("else".into()))
        );
        assert_eq!(options.extra.get("flagged"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.extra.get("attempts"), Some(&OptionValue::Number(3.0)));
        assert_eq!(options.extra.get("ratio"), Some(&OptionValue::Number(0.5)));
    }

    #[test]
    fn open_params_builder() {
        let params = OpenParams::url("/admin/").animated();
        assert_eq!(params.url.as_deref(), Some("/admin/"));
        assert!(params.animate);
        assert_eq!(OpenParams::default().url, None);
    }
}
