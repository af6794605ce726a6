#![forbid(unsafe_code)]

//! Sideframe: an in-page overlay panel that loads an administrative URL
//! inside an embedded frame without a full page navigation.
//!
//! # Key Components
//!
//! - [`Sideframe`] - the controller: open/close lifecycle, frame management,
//!   toolbar coordination, history navigation
//! - [`Context`] - explicit collaborator bundle (toolbar, settings store,
//!   config, viewport) injected at construction
//! - [`SideframeView`] - view-handle struct exposing the named regions the
//!   controller mutates (dimmer, frame container, history buttons, shim)
//! - [`LoadToken`] - generation-tagged completion token; a superseded frame's
//!   load signal is discarded rather than applied
//! - [`SettingsStore`] - read/write access to the persisted `sideframe`
//!   settings namespace
//!
//! # How it fits together
//! The controller is the orchestrator. `open()` runs synchronously through
//! the contract sequence (dimmer, toolbar, history reset, width, frame
//! attach); the embedded document's load completion arrives later through
//! [`Sideframe::finish_load`] with the token issued for that frame. All DOM
//! effects land on the headless view handles so every step is observable.

pub mod context;
pub mod controller;
pub mod dom;
pub mod error;
pub mod load;
pub mod options;
pub mod scroll;
pub mod settings;
pub mod toolbar;
pub mod view;

pub use context::{Config, Context};
pub use controller::Sideframe;
pub use dom::{Anchor, FrameDocument};
pub use error::{SideframeError, SideframeResult};
pub use load::LoadToken;
pub use options::{OnClose, OpenParams, OptionValue, Options, ReloadPolicy};
pub use settings::{MemorySettings, SettingsStore, SideframeSettings, StorageError, StorageResult};
pub use toolbar::{NullToolbar, Toolbar};
pub use view::{
    AnimationRecord, FrameContainer, FrameElement, HistoryButton, HostPage, Region, SideframeView,
    Viewport,
};

#[cfg(feature = "state-persistence")]
pub use settings::FileSettings;
