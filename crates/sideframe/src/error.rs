//! Controller error types.

use std::fmt;

/// Result type for controller operations.
pub type SideframeResult<T> = Result<T, SideframeError>;

/// Errors surfaced by the sideframe controller.
///
/// Input validation is deliberately thin: only the shape of the `open()`
/// arguments is checked. A present-but-malformed URL is handed to the frame
/// as-is, and a load that never completes is not an error here (the loader
/// simply stays on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideframeError {
    /// `open()` was called without a non-empty `url`.
    InvalidArgument,
}

impl fmt::Display for SideframeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => {
                write!(f, "The arguments passed to open were invalid.")
            }
        }
    }
}

impl std::error::Error for SideframeError {}
