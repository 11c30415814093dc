//! Page renderers for the mockup and the debug view.
//!
//! # Mockup Page
//!
//! - **Phone** ([`phone`]): Body, shadow and glare shifted by the pointer
//!   tilt, with the screen content clipped to the display area
//! - **Lifecycle screens** ([`lifecycle`]): Transaction, Secured, Progress,
//!   Complete and Verified content, drawn in phone-screen coordinates
//!
//! # Debug Page
//!
//! - **Debug Page** ([`debug`]): Frame timing, render and engine counters,
//!   debug log terminal (toggled with `Y`)
//!
//! Every renderer reads a [`MockupView`] snapshot taken once per frame, so
//! drawing never borrows the sequencer mutably.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use mockup_common::stepper::ProgressStepper;
use mockup_common::{PointerOffset, ScreenState, SettlementFeed};

mod debug;
mod lifecycle;
mod phone;

pub use debug::draw_debug_page;
pub use phone::{PHONE_BOUNDS, draw_phone};

/// Everything the renderers need from one frame.
pub struct MockupView<'a> {
    pub screen: ScreenState,
    /// Progress sub-stepper (reset to 0 outside Progress).
    pub stepper: &'a ProgressStepper,
    pub feed: &'a SettlementFeed,
    /// Current (possibly mid-fade) accent color.
    pub accent: Rgb565,
    /// Smoothed pointer offset.
    pub tilt: PointerOffset,
    /// Frame counter for the bob and pulse animations.
    pub frame: u32,
    /// Fraction of the current screen's dwell time already spent.
    pub screen_progress: f32,
    pub seed: u64,
}

/// Draw the content of the current screen.
///
/// `display` must already be clipped and translated to the phone screen.
pub fn draw_screen_content<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match view.screen {
        ScreenState::Transaction => lifecycle::draw_transaction(display, view),
        ScreenState::Secured => lifecycle::draw_secured(display, view),
        ScreenState::Progress => lifecycle::draw_progress(display, view),
        ScreenState::Complete => lifecycle::draw_complete(display, view),
        ScreenState::Verified => lifecycle::draw_verified(display, view),
    }
}
