//! Content of the five lifecycle screens.
//!
//! Everything here draws in phone-screen coordinates: (0, 0) is the top-left
//! of the screen area inside the bezel, and the target is already clipped to
//! it by [`super::phone`].

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;
use mockup_common::animations::calculate_bob_offset;
use mockup_common::colors::{CARD_BG, GRAY, SCREEN_BG, TEXT_MUTED};
use mockup_common::config::{FEED_ROW_HEIGHT, FEED_VISIBLE_ROWS, PHONE_SCREEN_WIDTH, PROGRESS_STEPS};
use mockup_common::feed::SettlementRecord;
use mockup_common::styles::{
    AMOUNT_STYLE_WHITE,
    CENTERED,
    HEADING_FONT,
    HEADING_STYLE_WHITE,
    LABEL_FONT,
    LABEL_STYLE_BLACK,
    LABEL_STYLE_MUTED,
    LABEL_STYLE_WHITE,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
};

use super::MockupView;
use crate::widgets::{draw_check, draw_lock, draw_pill_button, draw_progress_bar, draw_step_marker};

// =============================================================================
// Layout Constants
// =============================================================================

const CX: i32 = (PHONE_SCREEN_WIDTH / 2) as i32;
const MARGIN: i32 = 6;
const RIGHT_EDGE: i32 = PHONE_SCREEN_WIDTH as i32 - MARGIN;
const CONTENT_WIDTH: u32 = PHONE_SCREEN_WIDTH - 2 * MARGIN as u32;

/// Baseline of the screen heading.
const HEADING_Y: i32 = 34;

/// Amount shown on the Transaction, Secured and Complete screens.
const SEND_AMOUNT: &str = "2,450.00";
const SEND_CURRENCY: &str = "USDT";
const RECEIVE_AMOUNT: &str = "8,997.63 AED";

const PROGRESS_LABELS: [&str; PROGRESS_STEPS as usize] = ["Escrow funded", "Rate locked", "Payout sent"];
const PROGRESS_FIRST_ROW_Y: i32 = 62;
const PROGRESS_ROW_SPACING: i32 = 30;
const STEP_MARKER_DIAMETER: u32 = 14;
const PROGRESS_COUNTER_Y: i32 = 174;

const FEED_FIRST_ROW_Y: i32 = 58;

// =============================================================================
// Screens
// =============================================================================

/// Payment summary with amount, route and a confirm button.
pub fn draw_transaction<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Send", Point::new(CX, HEADING_Y), HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("You send", Point::new(CX, 58), LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(SEND_AMOUNT, Point::new(CX, 82), AMOUNT_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(SEND_CURRENCY, Point::new(CX, 96), LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    let card = Rectangle::new(Point::new(MARGIN, 106), Size::new(CONTENT_WIDTH, 40));
    RoundedRectangle::with_equal_corners(card, Size::new(4, 4))
        .into_styled(PrimitiveStyle::with_fill(CARD_BG))
        .draw(display)
        .ok();
    draw_key_value(display, 120, "Route", "USDT>AED");
    draw_key_value(display, 136, "Rate", "3.6725");

    let button = Rectangle::new(Point::new(MARGIN + 8, 158), Size::new(CONTENT_WIDTH - 16, 20));
    draw_pill_button(display, button, "Confirm", view.accent, LABEL_STYLE_BLACK);
}

/// Funds locked in escrow: floating padlock.
pub fn draw_secured<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bob = calculate_bob_offset(view.frame, true);
    draw_lock(display, Point::new(CX, 78 + bob), view.accent, SCREEN_BG);

    Text::with_text_style("Funds Locked", Point::new(CX, 132), HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Held in escrow", Point::new(CX, 150), LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    let mut amount: String<20> = String::new();
    let _ = write!(amount, "{SEND_AMOUNT} {SEND_CURRENCY}");
    Text::with_text_style(&amount, Point::new(CX, 168), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Three settlement steps driven by the progress stepper.
pub fn draw_progress<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Settling", Point::new(CX, HEADING_Y), HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    for (i, label) in PROGRESS_LABELS.iter().enumerate() {
        let y = PROGRESS_FIRST_ROW_Y + PROGRESS_ROW_SPACING * i as i32;
        let step = i as u8;
        let done = step < view.stepper.step();
        let current = step == view.stepper.step();
        draw_step_marker(
            display,
            Point::new(MARGIN + 10, y),
            STEP_MARKER_DIAMETER,
            done,
            current,
            view.accent,
            SCREEN_BG,
        );

        let style = if done { LABEL_STYLE_WHITE } else { LABEL_STYLE_MUTED };
        Text::with_text_style(label, Point::new(MARGIN + 24, y + 3), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    let bar = Rectangle::new(Point::new(MARGIN, 154), Size::new(CONTENT_WIDTH, 4));
    draw_progress_bar(display, bar, view.stepper.fraction(), view.accent, GRAY);

    let mut counter: String<8> = String::new();
    let _ = write!(counter, "{}/{}", view.stepper.step(), PROGRESS_STEPS);
    let counter_style = if view.stepper.is_complete() {
        MonoTextStyle::new(LABEL_FONT, view.accent)
    } else {
        LABEL_STYLE_MUTED
    };
    Text::with_text_style(&counter, Point::new(CX, PROGRESS_COUNTER_Y), counter_style, CENTERED)
        .draw(display)
        .ok();
}

/// Payout delivered.
pub fn draw_complete<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = Point::new(CX, 72);
    Circle::with_center(center, 44)
        .into_styled(PrimitiveStyle::with_fill(view.accent))
        .draw(display)
        .ok();
    draw_check(display, center, 22, SCREEN_BG, 4);

    Text::with_text_style("Delivered", Point::new(CX, 120), HEADING_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        RECEIVE_AMOUNT,
        Point::new(CX, 142),
        MonoTextStyle::new(HEADING_FONT, view.accent),
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style("Settled in 8.0s", Point::new(CX, 160), LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}

/// Live settlement feed, newest first.
pub fn draw_verified<D>(
    display: &mut D,
    view: &MockupView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Verified", Point::new(MARGIN, HEADING_Y - 6), HEADING_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Live indicator pulses with the bob phase
    let pulse = calculate_bob_offset(view.frame, true);
    let live_color = if pulse >= 0 { view.accent } else { GRAY };
    Circle::with_center(Point::new(RIGHT_EDGE - 26, HEADING_Y - 10), 5)
        .into_styled(PrimitiveStyle::with_fill(live_color))
        .draw(display)
        .ok();
    Text::with_text_style("LIVE", Point::new(RIGHT_EDGE, HEADING_Y - 6), LABEL_STYLE_MUTED, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    let pair = view.feed.latest().map_or("", SettlementRecord::currency_pair);
    let pair = ascii_label::<20>(pair);
    Text::with_text_style(&pair, Point::new(MARGIN, HEADING_Y + 10), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();

    for (i, record) in view.feed.records().take(FEED_VISIBLE_ROWS).enumerate() {
        let top = FEED_FIRST_ROW_Y + FEED_ROW_HEIGHT * i as i32;
        let newest_generated = i == 0 && view.feed.generated() > 0;
        draw_feed_row(display, top, record, view.accent, newest_generated);
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Label on the left, value on the right, inside a card.
fn draw_key_value<D>(
    display: &mut D,
    baseline: i32,
    key: &str,
    value: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(key, Point::new(MARGIN + 6, baseline), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(value, Point::new(RIGHT_EDGE - 6, baseline), LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Two-line settlement row: id, then amount and age.
fn draw_feed_row<D>(
    display: &mut D,
    top: i32,
    record: &SettlementRecord,
    accent: Rgb565,
    highlight: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if highlight {
        Rectangle::new(Point::new(MARGIN - 4, top + 1), Size::new(2, (FEED_ROW_HEIGHT - 4) as u32))
            .into_styled(PrimitiveStyle::with_fill(accent))
            .draw(display)
            .ok();
    }

    Text::with_text_style(record.id(), Point::new(MARGIN, top + 9), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(
        record.amount(),
        Point::new(MARGIN, top + 19),
        MonoTextStyle::new(LABEL_FONT, accent),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        record.age(),
        Point::new(RIGHT_EDGE, top + 19),
        MonoTextStyle::new(LABEL_FONT, TEXT_MUTED),
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}

/// Copy `text` for the ASCII-only fonts: arrows become `>`, other
/// non-ASCII characters are dropped, spaces around an arrow collapse.
pub fn ascii_label<const N: usize>(text: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in text.chars() {
        match c {
            '→' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push('>').ok();
            }
            ' ' if out.ends_with('>') => {}
            c if c.is_ascii() => {
                if out.push(c).is_err() {
                    break;
                }
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use mockup_common::colors::TRANSFER_BLUE;
    use mockup_common::config::PHONE_SCREEN_HEIGHT;
    use mockup_common::stepper::ProgressStepper;
    use mockup_common::timer::TimerSequence;
    use mockup_common::{PointerOffset, ScreenState, SettlementFeed};

    use super::*;

    fn render_progress(stepper: &ProgressStepper) -> SimulatorDisplay<Rgb565> {
        let feed = SettlementFeed::new();
        let view = MockupView {
            screen: ScreenState::Progress,
            stepper,
            feed: &feed,
            accent: TRANSFER_BLUE,
            tilt: PointerOffset::NEUTRAL,
            frame: 0,
            screen_progress: 0.0,
            seed: 1,
        };
        let mut display = SimulatorDisplay::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        draw_progress(&mut display, &view);
        display
    }

    fn counter_has_color(
        display: &SimulatorDisplay<Rgb565>,
        color: Rgb565,
    ) -> bool {
        let area = Rectangle::new(Point::new(CX - 20, PROGRESS_COUNTER_Y - 12), Size::new(40, 14));
        area.points().any(|p| display.get_pixel(p) == color)
    }

    // -------------------------------------------------------------------------
    // Progress
    // -------------------------------------------------------------------------

    #[test]
    fn test_progress_counter_lights_up_when_complete() {
        let idle = ProgressStepper::new();
        let display = render_progress(&idle);
        assert!(!counter_has_color(&display, TRANSFER_BLUE), "Counter is muted before the last step");

        let mut seq = TimerSequence::new();
        let mut done = ProgressStepper::new();
        done.start(0, &mut seq);
        while done.fire_due(3000, &mut seq) {}
        assert!(done.is_complete());

        let display = render_progress(&done);
        assert!(counter_has_color(&display, TRANSFER_BLUE), "Counter takes the accent once all steps are done");
    }

    #[test]
    fn test_progress_bar_follows_stepper() {
        let bar_end = Point::new(MARGIN + CONTENT_WIDTH as i32 - 2, 155);

        let idle = ProgressStepper::new();
        assert_eq!(render_progress(&idle).get_pixel(bar_end), GRAY, "Empty bar shows the track");

        let mut seq = TimerSequence::new();
        let mut done = ProgressStepper::new();
        done.start(0, &mut seq);
        while done.fire_due(3000, &mut seq) {}
        assert_eq!(render_progress(&done).get_pixel(bar_end), TRANSFER_BLUE, "Full bar after step 3");
    }

    #[test]
    fn test_ascii_label_replaces_arrow() {
        assert_eq!(ascii_label::<20>("USDT → AED").as_str(), "USDT>AED");
        assert_eq!(ascii_label::<20>("plain").as_str(), "plain");
        assert_eq!(ascii_label::<4>("truncated").as_str(), "trun");
    }

    #[test]
    fn test_feed_rows_fit_on_screen() {
        use mockup_common::config::PHONE_SCREEN_HEIGHT;
        let last_baseline = FEED_FIRST_ROW_Y + FEED_ROW_HEIGHT * (FEED_VISIBLE_ROWS as i32 - 1) + 19;
        assert!(
            last_baseline < PHONE_SCREEN_HEIGHT as i32 - 12,
            "Rows must end above the pagination dots"
        );
    }
}
