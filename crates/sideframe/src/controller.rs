//! The sideframe controller.
//!
//! Owns the open/close lifecycle, drives the width resolver and URL builder,
//! manages the embedded frame, talks to the toolbar collaborator, and
//! persists state through the settings store.
//!
//! # Ordering guarantees
//!
//! `open()` runs its side effects synchronously in contract order: dimmer,
//! toolbar (`show_loader`, `open`, `lock(true)`), loader class, history
//! reset, container clear, width, frame attach, scroll prevention. The
//! loader-visible state is therefore established before the frame's address
//! is set, and cleared only by the completion handler bound to the current
//! frame generation. Starting a new `open()` while a load is outstanding
//! silently abandons the previous load: its token no longer matches.

use sideframe_core::{
    History, NavEntry, WidthInputs, WidthResolver, make_url, nav_params,
};

use crate::context::Context;
use crate::dom::{CLASS_ADMIN, CLASS_ADMIN_SIDEFRAME, CLASS_DEBUG, FrameDocument};
use crate::error::{SideframeError, SideframeResult};
use crate::load::LoadToken;
use crate::options::{OpenParams, Options, ReloadPolicy};
use crate::scroll::SCROLL_NAMESPACE;
use crate::settings::SideframeSettings;
use crate::view::{CLASS_LOADER, CLASS_PREVENT_SCROLLING, FrameElement, SideframeView};

/// The overlay panel controller.
pub struct Sideframe {
    ctx: Context,
    options: Options,
    view: SideframeView,
    history: History,
    width_resolver: WidthResolver,
    open: bool,
    generation: u64,
    // First and last addresses loaded in the current session; drives the
    // close-time reload policy.
    session_first_url: Option<String>,
    last_loaded_url: Option<String>,
}

impl Sideframe {
    /// Build a controller over the given collaborators. The view handles are
    /// populated once here and never replaced.
    #[must_use]
    pub fn new(ctx: Context, options: Options) -> Self {
        let mut view = SideframeView::default();
        view.host.set_width(ctx.viewport.width);
        Self {
            ctx,
            options,
            view,
            history: History::new(),
            width_resolver: WidthResolver::new(),
            open: false,
            generation: 0,
            session_first_url: None,
            last_loaded_url: None,
        }
    }

    /// The view handles.
    #[must_use]
    pub fn view(&self) -> &SideframeView {
        &self.view
    }

    /// Mutable view handles, for hosts that resize or restyle regions.
    pub fn view_mut(&mut self) -> &mut SideframeView {
        &mut self.view
    }

    /// The construction options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The navigation history of the current session.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the panel is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Token for the frame whose load is currently outstanding, if any.
    /// `None` once the live frame has finished loading or no frame exists.
    #[must_use]
    pub fn pending_token(&self) -> Option<LoadToken> {
        let frame = self.view.container.frame()?;
        if frame.document().is_some() {
            return None;
        }
        Some(LoadToken::new(frame.generation()))
    }

    /// Open the panel at `params.url`.
    ///
    /// Fails with [`SideframeError::InvalidArgument`] when no non-empty URL
    /// is supplied; a malformed-but-present URL is handed to the frame
    /// as-is. Chainable on success.
    pub fn open(&mut self, params: OpenParams) -> SideframeResult<&mut Self> {
        let url = params
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(SideframeError::InvalidArgument)?
            .to_owned();
        tracing::debug!(url = %url, animate = params.animate, "sideframe open");

        self.view.dimmer.show();

        self.ctx.toolbar.show_loader();
        self.ctx.toolbar.open();
        self.ctx.toolbar.lock(true);

        self.view.container.add_class(CLASS_LOADER);

        // History is session-scoped: reset unconditionally, even when a
        // non-empty history is present.
        self.history.reset();
        self.update_history_buttons();

        // Drop the previous frame subtree before inserting the new one, so
        // a stale load event cannot fire against current state.
        self.view.container.clear();

        let persisted = self.ctx.settings.load().unwrap_or_else(|e| {
            tracing::warn!(store = self.ctx.settings.name(), error = %e, "settings load failed");
            SideframeSettings::default()
        });
        let target = self.width_resolver.resolve(WidthInputs {
            container_width: self.view.host.width(),
            viewport_width: self.ctx.viewport.width,
            fraction: self.options.sideframe_width,
            persisted_position: persisted.position,
        });
        // Idempotence guard: a width equal to the applied one is skipped
        // entirely, independent of the animate flag.
        if self.view.container.width() != Some(target) {
            if params.animate {
                self.view
                    .container
                    .animate_to(target, self.options.sideframe_duration);
            } else {
                self.view.container.set_width(target);
            }
        }

        let extra = nav_params(&url, &self.ctx.config.request);
        let frame_url = make_url(&url, &extra);
        self.generation += 1;
        self.view
            .container
            .attach(FrameElement::new(frame_url.clone(), self.generation));
        self.session_first_url = Some(frame_url);
        self.last_loaded_url = None;

        if self.ctx.viewport.touch {
            self.view.host.add_body_class(CLASS_PREVENT_SCROLLING);
            self.view.host.scroll.prevent(SCROLL_NAMESPACE);
        }

        self.open = true;
        Ok(self)
    }

    /// Complete a frame load.
    ///
    /// Applies the completion effects only when `token` matches the live,
    /// not-yet-loaded frame; a superseded token is discarded and `false` is
    /// returned. This is the cancellation mechanism for abandoned loads.
    pub fn finish_load(&mut self, token: LoadToken, mut document: FrameDocument) -> bool {
        let live = self
            .view
            .container
            .frame()
            .is_some_and(|frame| {
                frame.generation() == token.generation() && frame.document().is_none()
            });
        if !live {
            tracing::debug!(
                generation = token.generation(),
                "stale load token discarded"
            );
            return false;
        }

        self.view.container.remove_class(CLASS_LOADER);
        self.ctx.toolbar.hide_loader();
        self.ctx.toolbar.lock(false);

        document.add_body_class(CLASS_ADMIN);
        document.add_body_class(CLASS_ADMIN_SIDEFRAME);
        if self.ctx.config.debug {
            document.add_body_class(CLASS_DEBUG);
        }
        let rewritten = document.retarget_view_site_links();
        tracing::debug!(url = %document.url(), rewritten, "sideframe load complete");

        self.last_loaded_url = Some(document.url().to_owned());
        let settings = SideframeSettings {
            url: Some(document.url().to_owned()),
            position: self
                .view
                .container
                .width()
                .map(|width| width.pixels_in(self.view.host.width())),
        };
        if let Err(e) = self.ctx.settings.save(&settings) {
            tracing::warn!(store = self.ctx.settings.name(), error = %e, "failed to persist sideframe settings");
        }

        if let Some(frame) = self.view.container.frame_mut() {
            frame.reveal();
            frame.set_document(document);
        }
        true
    }

    /// Record an in-frame navigation reported by the host: the entry being
    /// left goes onto the back stack and the forward stack is discarded.
    pub fn record_visit(&mut self, url: impl Into<String>) {
        let url = url.into();
        if let Some(current) = self.current_url() {
            self.history.record(NavEntry::new(current));
        }
        if let Some(frame) = self.view.container.frame_mut() {
            frame.set_url(url);
        }
        self.update_history_buttons();
    }

    /// Navigate back in the session history. Returns `false` when the back
    /// stack is empty.
    pub fn history_back(&mut self) -> bool {
        let Some(current) = self.current_url() else {
            return false;
        };
        let Some(entry) = self.history.pop_back(NavEntry::new(current)) else {
            return false;
        };
        self.load_entry(entry.into_url());
        true
    }

    /// Navigate forward in the session history. Returns `false` when the
    /// forward stack is empty.
    pub fn history_forward(&mut self) -> bool {
        let Some(current) = self.current_url() else {
            return false;
        };
        let Some(entry) = self.history.pop_forward(NavEntry::new(current)) else {
            return false;
        };
        self.load_entry(entry.into_url());
        true
    }

    /// Close the panel. Chainable.
    pub fn close(&mut self) -> &mut Self {
        tracing::debug!("sideframe close");
        self.view.dimmer.hide();
        self.ctx.toolbar.lock(false);
        self.ctx.toolbar.hide_loader();
        self.view.container.remove_class(CLASS_LOADER);

        self.view.host.scroll.allow(SCROLL_NAMESPACE);
        self.view.host.remove_body_class(CLASS_PREVENT_SCROLLING);

        if let Some(on_close) = self.options.on_close.as_mut() {
            on_close();
        }
        if self.requires_reload() {
            tracing::debug!("host page reload requested");
            self.view.host.request_reload();
        }
        self.open = false;
        self
    }

    fn requires_reload(&self) -> bool {
        match self.options.reload_policy {
            ReloadPolicy::Never => false,
            ReloadPolicy::UrlChanged => {
                match (&self.session_first_url, &self.last_loaded_url) {
                    (Some(first), Some(last)) => first != last,
                    _ => false,
                }
            }
        }
    }

    fn current_url(&self) -> Option<String> {
        self.view
            .container
            .frame()
            .map(|frame| frame.url().to_owned())
    }

    /// Reload the live frame at `url` with a fresh generation, re-entering
    /// the loading state.
    fn load_entry(&mut self, url: String) {
        tracing::debug!(url = %url, "sideframe history navigation");
        self.ctx.toolbar.show_loader();
        self.ctx.toolbar.lock(true);
        self.view.container.add_class(CLASS_LOADER);
        self.view.container.clear();
        self.generation += 1;
        self.view
            .container
            .attach(FrameElement::new(url, self.generation));
        self.update_history_buttons();
    }

    fn update_history_buttons(&mut self) {
        self.view
            .history_back
            .set_enabled(self.history.can_go_back());
        self.view
            .history_forward
            .set_enabled(self.history.can_go_forward());
    }
}

impl std::fmt::Debug for Sideframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sideframe")
            .field("open", &self.open)
            .field("generation", &self.generation)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
