//! Load-completion tokens.
//!
//! Each `open()` (and each history navigation) attaches a fresh frame and
//! issues a token tagged with that frame's generation. The browser-driven
//! load event is modeled as the host handing the token back together with
//! the loaded document; only the token matching the live frame may mutate
//! controller state. A superseded token is simply discarded, which is the
//! cancellation mechanism: there is no way to "abort" a load, only to make
//! its completion inert.

/// Completion token for one frame load.
///
/// Obtained from [`Sideframe::pending_token`](crate::Sideframe::pending_token)
/// after an open or history navigation, and redeemed through
/// [`Sideframe::finish_load`](crate::Sideframe::finish_load).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken {
    generation: u64,
}

impl LoadToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// The frame generation this token belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
