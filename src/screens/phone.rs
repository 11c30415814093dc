//! Phone frame with pointer tilt.
//!
//! The display is flat, so tilt is shown with three cues:
//!
//! - Parallax: the body shifts by [`PARALLAX_BODY_PX`] and the screen content
//!   by [`PARALLAX_CONTENT_PX`], so the content floats above the glass
//! - The drop shadow moves opposite to the body
//! - The edge turned toward the viewer shows a thicker rim, and a glare
//!   streak slides along the top bezel
//!
//! Screen content is drawn through a cropped and translated target, so each
//! lifecycle screen works in plain (0, 0)-based coordinates and can never
//! paint outside the glass.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use mockup_common::colors::{BACKDROP, PHONE_BODY, PHONE_EDGE, SCREEN_BG, TEXT_MUTED, WHITE};
use mockup_common::config::{
    PARALLAX_BODY_PX,
    PARALLAX_CONTENT_PX,
    PHONE_CORNER_RADIUS,
    PHONE_HEIGHT,
    PHONE_SCREEN_HEIGHT,
    PHONE_SCREEN_WIDTH,
    PHONE_SCREEN_X,
    PHONE_SCREEN_Y,
    PHONE_WIDTH,
    PHONE_X,
    PHONE_Y,
    SCREEN_HEIGHT,
    TILT_MAX_DEG,
};
use mockup_common::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED};

use super::{MockupView, draw_screen_content};
use crate::widgets::draw_pagination_dots;

// =============================================================================
// Layout Constants
// =============================================================================

/// Phone body at rest. Pointer moves are mapped against this rectangle.
pub const PHONE_BOUNDS: Rectangle =
    Rectangle::new(Point::new(PHONE_X, PHONE_Y), Size::new(PHONE_WIDTH, PHONE_HEIGHT));

/// Area repainted every frame: the body plus its largest shift and shadow.
const PHONE_CLEAR_RECT: Rectangle =
    Rectangle::new(Point::new(PHONE_X - 10, 0), Size::new(PHONE_WIDTH + 20, SCREEN_HEIGHT));

/// Screen area at rest, relative to the body.
const SCREEN_OFFSET: Point = Point::new(PHONE_SCREEN_X - PHONE_X, PHONE_SCREEN_Y - PHONE_Y);
const SCREEN_SIZE: Size = Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT);
const SCREEN_CORNER_RADIUS: u32 = 8;

/// Shadow sits this far below the body before the tilt offset.
const SHADOW_DROP: i32 = 4;
const SHADOW_COLOR: Rgb565 = Rgb565::new(1, 2, 2);

/// Widest rim shown on the edge facing the viewer at full tilt.
const RIM_MAX_PX: f32 = 3.0;

const GLARE_WIDTH: i32 = 28;
const GLARE_COLOR: Rgb565 = TEXT_MUTED;

/// Notch centered at the top of the glass.
const NOTCH_SIZE: Size = Size::new(36, 8);

/// Status bar and pagination dots, in screen coordinates.
const STATUS_TIME: &str = "9:41";
const STATUS_TIME_POS: Point = Point::new(8, 11);
const STATUS_BATTERY_RECT: Rectangle =
    Rectangle::new(Point::new(PHONE_SCREEN_WIDTH as i32 - 20, 4), Size::new(12, 6));
const PAGINATION_POS: Point = Point::new((PHONE_SCREEN_WIDTH / 2) as i32, PHONE_SCREEN_HEIGHT as i32 - 8);

const BACKDROP_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKDROP);

// =============================================================================
// Drawing
// =============================================================================

/// Repaint the phone area: shadow, body, rim, glare, glass and content.
pub fn draw_phone<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    PHONE_CLEAR_RECT.into_styled(BACKDROP_FILL_STYLE).draw(display).ok();

    let body_shift = view.tilt.parallax_px(PARALLAX_BODY_PX);
    let content_shift = view.tilt.parallax_px(PARALLAX_CONTENT_PX);
    let body = PHONE_BOUNDS.translate(body_shift);
    let corner = Size::new(PHONE_CORNER_RADIUS, PHONE_CORNER_RADIUS);

    // Shadow falls away from the pointer
    let shadow = body.translate(Point::new(-2 * body_shift.x, SHADOW_DROP - 2 * body_shift.y));
    RoundedRectangle::with_equal_corners(shadow, corner)
        .into_styled(PrimitiveStyle::with_fill(SHADOW_COLOR))
        .draw(display)
        .ok();

    let body_style = PrimitiveStyleBuilder::new()
        .fill_color(PHONE_BODY)
        .stroke_color(PHONE_EDGE)
        .stroke_width(1)
        .build();
    RoundedRectangle::with_equal_corners(body, corner)
        .into_styled(body_style)
        .draw(display)
        .ok();

    draw_rim(display, body, view);
    draw_glare(display, body, view.tilt.nx);

    let glass = Rectangle::new(body.top_left + SCREEN_OFFSET, SCREEN_SIZE);
    RoundedRectangle::with_equal_corners(glass, Size::new(SCREEN_CORNER_RADIUS, SCREEN_CORNER_RADIUS))
        .into_styled(PrimitiveStyle::with_fill(SCREEN_BG))
        .draw(display)
        .ok();

    let mut clipped = display.cropped(&glass);
    {
        let mut content = clipped.translated(content_shift - body_shift);
        draw_screen_content(&mut content, view);
    }
    draw_status_bar(&mut clipped);
    draw_pagination_dots(&mut clipped, PAGINATION_POS, view.screen.index(), view.accent);
}

/// Thicker edge on the sides turned toward the viewer.
fn draw_rim<D>(
    display: &mut D,
    body: Rectangle,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (rot_x, rot_y) = view.tilt.tilt_deg(TILT_MAX_DEG);
    let rim_style = PrimitiveStyle::with_fill(PHONE_EDGE);
    let radius = PHONE_CORNER_RADIUS as i32;

    let side = rim_px(rot_y);
    if side > 0 {
        // Right edge turned away shows the left rim, and the other way round
        let x = if rot_y > 0.0 { body.top_left.x } else { body.top_left.x + body.size.width as i32 - side as i32 };
        Rectangle::new(Point::new(x, body.top_left.y + radius), Size::new(side, body.size.height - 2 * radius as u32))
            .into_styled(rim_style)
            .draw(display)
            .ok();
    }

    let lid = rim_px(rot_x);
    if lid > 0 {
        let y = if rot_x > 0.0 { body.top_left.y } else { body.top_left.y + body.size.height as i32 - lid as i32 };
        Rectangle::new(Point::new(body.top_left.x + radius, y), Size::new(body.size.width - 2 * radius as u32, lid))
            .into_styled(rim_style)
            .draw(display)
            .ok();
    }
}

/// Rim thickness for a rotation angle in degrees.
fn rim_px(rotation_deg: f32) -> u32 { (rotation_deg.abs() / TILT_MAX_DEG * RIM_MAX_PX + 0.5) as u32 }

/// Glare streak on the top bezel, following the pointer horizontally.
fn draw_glare<D>(
    display: &mut D,
    body: Rectangle,
    nx: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let travel = (PHONE_WIDTH as f32 / 3.0) * nx;
    let center_x = body.center().x + travel as i32;
    let y = body.top_left.y + 2;
    Line::new(Point::new(center_x - GLARE_WIDTH / 2, y), Point::new(center_x + GLARE_WIDTH / 2, y))
        .into_styled(PrimitiveStyle::with_stroke(GLARE_COLOR, 1))
        .draw(display)
        .ok();
}

/// Clock, notch and battery at the top of the glass.
fn draw_status_bar<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let notch = Rectangle::new(
        Point::new((PHONE_SCREEN_WIDTH - NOTCH_SIZE.width) as i32 / 2, 0),
        NOTCH_SIZE,
    );
    RoundedRectangle::with_equal_corners(notch, Size::new(4, 4))
        .into_styled(PrimitiveStyle::with_fill(PHONE_BODY))
        .draw(display)
        .ok();

    Text::with_text_style(STATUS_TIME, STATUS_TIME_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    STATUS_BATTERY_RECT
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 1))
        .draw(display)
        .ok();
    Rectangle::new(STATUS_BATTERY_RECT.top_left + Point::new(2, 2), Size::new(7, 2))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}
