#![forbid(unsafe_code)]

//! Test doubles and fixtures for the sideframe crates.
//!
//! - [`RecordingToolbar`] - toolbar double that records every call in order
//! - [`TestRig`] - a controller wired to recording collaborators with a
//!   desktop-sized viewport, plus a builder for the common variations
//!   (touch viewport, debug config, pre-seeded settings)
//! - [`fixtures`] - canned frame documents resembling the administrative
//!   pages the panel loads

pub mod fixtures;
pub mod rig;
pub mod toolbar;

pub use rig::{TestRig, TestRigBuilder};
pub use toolbar::{RecordingToolbar, ToolbarCall};
