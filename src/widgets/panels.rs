//! Side panels around the phone: caption, dwell bar, Next button, FPS.
//!
//! Fixed positions are `const` and come from the common layout constants.
//! The backdrop and caption only change with the screen, so they are drawn
//! after a display clear. The dwell bar and the button follow the accent
//! fade and are redrawn every frame.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{ContainsPoint, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;
use mockup_common::{
    ScreenState,
    colors::{BACKDROP, GRAY, WHITE},
    config::{
        DWELL_BAR_HEIGHT,
        DWELL_BAR_WIDTH,
        DWELL_BAR_X,
        DWELL_BAR_Y,
        LEFT_PANEL_CENTER_X,
        NEXT_BUTTON_HEIGHT,
        NEXT_BUTTON_WIDTH,
        NEXT_BUTTON_X,
        NEXT_BUTTON_Y,
        RIGHT_PANEL_CENTER_X,
        SCREEN_HEIGHT,
        SCREEN_WIDTH,
    },
    screen::SCREEN_COUNT,
    styles::{
        CENTERED,
        HEADING_STYLE_WHITE,
        LABEL_FONT,
        LABEL_STYLE_BLACK,
        LABEL_STYLE_MUTED,
        LABEL_STYLE_WHITE,
        RIGHT_ALIGNED,
    },
};

use super::primitives::{draw_pill_button, draw_progress_bar};

// =============================================================================
// Layout Constants
// =============================================================================

/// Full-screen backdrop.
const BACKDROP_RECT: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Product title, two lines at the top of the left panel.
const TITLE_LINE_1_POS: Point = Point::new(LEFT_PANEL_CENTER_X, 24);
const TITLE_LINE_2_POS: Point = Point::new(LEFT_PANEL_CENTER_X, 40);

/// Screen label and "n/5" counter above the dwell bar.
const CAPTION_LABEL_POS: Point = Point::new(LEFT_PANEL_CENTER_X, DWELL_BAR_Y - 18);
const CAPTION_COUNTER_POS: Point = Point::new(LEFT_PANEL_CENTER_X, DWELL_BAR_Y - 6);

const DWELL_BAR_RECT: Rectangle = Rectangle::new(
    Point::new(DWELL_BAR_X, DWELL_BAR_Y),
    Size::new(DWELL_BAR_WIDTH, DWELL_BAR_HEIGHT),
);

/// The clickable "Next" control.
pub const NEXT_BUTTON_RECT: Rectangle = Rectangle::new(
    Point::new(NEXT_BUTTON_X, NEXT_BUTTON_Y),
    Size::new(NEXT_BUTTON_WIDTH, NEXT_BUTTON_HEIGHT),
);

/// Key hints under the Next button.
const HINT_FIRST_Y: i32 = NEXT_BUTTON_Y + NEXT_BUTTON_HEIGHT as i32 + 16;
const HINT_LINE_HEIGHT: i32 = 12;
const KEY_HINTS: [&str; 3] = ["N/SPC next", "Y debug", "ESC quit"];

/// FPS counter, top right (right-aligned, 5px from edge).
const FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 14);
const FPS_CLEAR_RECT: Rectangle = Rectangle::new(Point::new(RIGHT_PANEL_CENTER_X - 40, 4), Size::new(86, 13));

const BACKDROP_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKDROP);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Fill the backdrop and draw the static text of both panels.
pub fn draw_backdrop<D>(
    display: &mut D,
    screen: ScreenState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    BACKDROP_RECT.into_styled(BACKDROP_FILL_STYLE).draw(display).ok();

    Text::with_text_style("LOCKED &", TITLE_LINE_1_POS, HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("SECURED", TITLE_LINE_2_POS, HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_caption(display, screen);

    for (i, hint) in KEY_HINTS.iter().enumerate() {
        let pos = Point::new(RIGHT_PANEL_CENTER_X, HINT_FIRST_Y + HINT_LINE_HEIGHT * i as i32);
        Text::with_text_style(hint, pos, LABEL_STYLE_MUTED, CENTERED)
            .draw(display)
            .ok();
    }
}

/// Screen label and position in the cycle.
fn draw_caption<D>(
    display: &mut D,
    screen: ScreenState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(screen.label(), CAPTION_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let mut counter: String<8> = String::new();
    let _ = write!(counter, "{}/{}", screen.index() + 1, SCREEN_COUNT);
    Text::with_text_style(&counter, CAPTION_COUNTER_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}

/// Time spent on the current screen as a bar (0.0-1.0).
pub fn draw_dwell_bar<D>(
    display: &mut D,
    fraction: f32,
    accent: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_progress_bar(display, DWELL_BAR_RECT, fraction, accent, GRAY);
}

/// "Next" button in the accent color.
pub fn draw_next_button<D>(
    display: &mut D,
    accent: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_pill_button(display, NEXT_BUTTON_RECT, "NEXT >", accent, LABEL_STYLE_BLACK);
}

/// Whether a click at `point` hits the Next button.
#[inline]
pub fn hit_next_button(point: Point) -> bool { NEXT_BUTTON_RECT.contains(point) }

/// FPS counter in the top right corner.
pub fn draw_fps<D>(
    display: &mut D,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    FPS_CLEAR_RECT.into_styled(BACKDROP_FILL_STYLE).draw(display).ok();

    let mut fps_str: String<16> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::with_text_style(&fps_str, FPS_POS, MonoTextStyle::new(LABEL_FONT, WHITE), RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
