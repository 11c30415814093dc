//! Page navigation for the host window.
//!
//! Press `Y` to toggle between pages.
//!
//! - [`Page::Mockup`]: the phone with the five-screen cycle
//! - [`Page::Debug`]: frame timing, engine counters and the debug log terminal

/// Available pages in the host application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Phone mockup with tilt, pagination dots and the Next button.
    #[default]
    Mockup,

    /// Profiling and engine state.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Mockup => Self::Debug,
            Self::Debug => Self::Mockup,
        }
    }
}
