//! Low-level drawing primitives shared across screens.
//!
//! Each function draws one small element at a given position and takes the
//! color from the caller, so the same shapes follow the animated accent.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use mockup_common::colors::GRAY;
use mockup_common::screen::SCREEN_COUNT;
use mockup_common::styles::CENTERED;

/// Spacing between pagination dot centers.
const DOT_SPACING: i32 = 10;

/// Draw a check mark (two strokes) centered on `center`.
///
/// `size` is the width of the mark; the height follows from it.
pub fn draw_check<D>(
    display: &mut D,
    center: Point,
    size: i32,
    color: Rgb565,
    stroke: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, stroke);
    let half = size / 2;
    let knee = Point::new(center.x - half / 3, center.y + half / 2);

    Line::new(Point::new(center.x - half, center.y), knee)
        .into_styled(style)
        .draw(display)
        .ok();
    Line::new(knee, Point::new(center.x + half, center.y - half / 2))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Step indicator: filled with a check when done, ring when current, gray ring otherwise.
pub fn draw_step_marker<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    done: bool,
    current: bool,
    accent: Rgb565,
    check_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let circle = Circle::with_center(center, diameter);
    if done {
        circle.into_styled(PrimitiveStyle::with_fill(accent)).draw(display).ok();
        draw_check(display, center, diameter as i32 / 2, check_color, 2);
    } else {
        let ring = if current { accent } else { GRAY };
        circle.into_styled(PrimitiveStyle::with_stroke(ring, 2)).draw(display).ok();
    }
}

/// Padlock: arc shackle over a rounded body with a keyhole.
pub fn draw_lock<D>(
    display: &mut D,
    center: Point,
    color: Rgb565,
    keyhole: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Shackle: upper half circle, legs down into the body
    let shackle_style = PrimitiveStyle::with_stroke(color, 4);
    Arc::with_center(center - Point::new(0, 8), 26, 180.0.deg(), 180.0.deg())
        .into_styled(shackle_style)
        .draw(display)
        .ok();
    Line::new(center + Point::new(-11, -8), center + Point::new(-11, 0))
        .into_styled(shackle_style)
        .draw(display)
        .ok();
    Line::new(center + Point::new(11, -8), center + Point::new(11, 0))
        .into_styled(shackle_style)
        .draw(display)
        .ok();

    // Body
    RoundedRectangle::with_equal_corners(
        Rectangle::with_center(center + Point::new(0, 12), Size::new(36, 28)),
        Size::new(4, 4),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();

    // Keyhole
    Circle::with_center(center + Point::new(0, 9), 7)
        .into_styled(PrimitiveStyle::with_fill(keyhole))
        .draw(display)
        .ok();
    Line::new(center + Point::new(0, 11), center + Point::new(0, 17))
        .into_styled(PrimitiveStyle::with_stroke(keyhole, 3))
        .draw(display)
        .ok();
}

/// Horizontal bar filled to `fraction` (0.0-1.0) over a track.
pub fn draw_progress_bar<D>(
    display: &mut D,
    area: Rectangle,
    fraction: f32,
    fill: Rgb565,
    track: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(track)).draw(display).ok();

    let filled = (area.size.width as f32 * fraction.clamp(0.0, 1.0)) as u32;
    if filled > 0 {
        Rectangle::new(area.top_left, Size::new(filled, area.size.height))
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)
            .ok();
    }
}

/// Rounded button with a centered label.
pub fn draw_pill_button<D>(
    display: &mut D,
    area: Rectangle,
    label: &str,
    fill: Rgb565,
    text_style: MonoTextStyle<'_, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = area.size.height / 2;
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();

    // FONT_6X10 baseline sits ~3px below the vertical center
    let center = area.center() + Point::new(0, 3);
    Text::with_text_style(label, center, text_style, CENTERED)
        .draw(display)
        .ok();
}

/// One dot per screen; the active one is wider and accent-colored.
pub fn draw_pagination_dots<D>(
    display: &mut D,
    center: Point,
    active: usize,
    accent: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let first_x = center.x - DOT_SPACING * (SCREEN_COUNT as i32 - 1) / 2;
    for i in 0..SCREEN_COUNT {
        let dot_center = Point::new(first_x + DOT_SPACING * i as i32, center.y);
        if i == active {
            RoundedRectangle::with_equal_corners(
                Rectangle::with_center(dot_center, Size::new(8, 4)),
                Size::new(2, 2),
            )
            .into_styled(PrimitiveStyle::with_fill(accent))
            .draw(display)
            .ok();
        } else {
            Circle::with_center(dot_center, 4)
                .into_styled(PrimitiveStyle::with_fill(GRAY))
                .draw(display)
                .ok();
        }
    }
}
