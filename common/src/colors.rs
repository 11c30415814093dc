//! Color palette for the mockup.
//!
//! All colors are `Rgb565` (5-6-5 bits), the native format of the simulator
//! framebuffer:
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Each screen has an accent color; see [`accent_for`].

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::screen::ScreenState;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Primary text on the phone screen.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Critical frame time on the debug page.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure yellow (31, 63, 0). Slow frame time on the debug page.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure green (0, 63, 0). Good frame time on the debug page.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Surface Colors
// =============================================================================

/// Desk behind the phone. RGB565: (2, 5, 6).
pub const BACKDROP: Rgb565 = Rgb565::new(2, 5, 6);

/// Phone body and bezel. RGB565: (4, 8, 5).
pub const PHONE_BODY: Rgb565 = Rgb565::new(4, 8, 5);

/// Phone body highlight edge. RGB565: (9, 18, 11).
pub const PHONE_EDGE: Rgb565 = Rgb565::new(9, 18, 11);

/// Phone screen background. RGB565: (1, 3, 3).
pub const SCREEN_BG: Rgb565 = Rgb565::new(1, 3, 3);

/// Card background on the phone screen. RGB565: (3, 7, 6).
pub const CARD_BG: Rgb565 = Rgb565::new(3, 7, 6);

/// Secondary text (labels, ages). RGB565: (14, 29, 16).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(14, 29, 16);

/// Dividers and inactive pagination dots. RGB565: (7, 14, 8).
pub const GRAY: Rgb565 = Rgb565::new(7, 14, 8);

// =============================================================================
// Screen Accents
// =============================================================================

/// Transaction accent. RGB565: (6, 38, 31).
pub const TRANSFER_BLUE: Rgb565 = Rgb565::new(6, 38, 31);

/// Secured (escrow lock) accent. RGB565: (31, 44, 4).
pub const ESCROW_AMBER: Rgb565 = Rgb565::new(31, 44, 4);

/// Progress accent. RGB565: (20, 28, 31).
pub const PROGRESS_VIOLET: Rgb565 = Rgb565::new(20, 28, 31);

/// Complete accent. RGB565: (4, 55, 12).
pub const SETTLE_GREEN: Rgb565 = Rgb565::new(4, 55, 12);

/// Verified (live feed) accent. RGB565: (2, 52, 24).
pub const VERIFIED_TEAL: Rgb565 = Rgb565::new(2, 52, 24);

/// Accent color for a screen.
pub const fn accent_for(screen: ScreenState) -> Rgb565 {
    match screen {
        ScreenState::Transaction => TRANSFER_BLUE,
        ScreenState::Secured => ESCROW_AMBER,
        ScreenState::Progress => PROGRESS_VIOLET,
        ScreenState::Complete => SETTLE_GREEN,
        ScreenState::Verified => VERIFIED_TEAL,
    }
}
