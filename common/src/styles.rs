//! Pre-computed static text styles.
//!
//! Styles are `const` so nothing is built per frame. Text whose color follows
//! the animated accent uses the exposed font references with
//! `MonoTextStyle::new(FONT, color)` instead.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use crate::colors::{BLACK, TEXT_MUTED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Screen titles, button labels, captions.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Feed rows, debug log.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Feed amounts, FPS counter.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for accent-colored styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Heading font (`ProFont` 12pt). Accent-colored amounts.
pub const HEADING_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small muted text for secondary labels.
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_MUTED);

/// Small black text on accent-colored buttons.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Heading text on the phone screen.
pub const HEADING_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

/// Large amount text.
pub const AMOUNT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
