#![forbid(unsafe_code)]

//! Pure logic for the sideframe overlay panel.
//!
//! This crate holds the parts of the sideframe that need no collaborators:
//!
//! - [`History`] - per-session back/forward navigation ledger
//! - [`WidthResolver`] - target panel width from settings, container size,
//!   and the mobile breakpoint
//! - [`make_url`] / [`nav_params`] - final frame address construction from a
//!   base URL and the ambient request context
//!
//! # Role in the sideframe
//! `sideframe-core` is the bottom layer. The `sideframe` crate drives these
//! components from its controller; nothing here touches the view handles,
//! the toolbar, or the settings store.

pub mod history;
pub mod url;
pub mod width;

pub use history::{History, NavEntry};
pub use url::{RequestContext, make_url, nav_params};
pub use width::{BREAKPOINT_MOBILE, ResolvedWidth, WidthInputs, WidthResolver};
