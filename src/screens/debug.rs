//! Debug/profiling page rendering.
//!
//! Displays frame timing, render counters, engine state, and the debug log
//! terminal. Toggled with the `Y` key from the mockup page.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DEBUG VIEW                              UP 00:12:34       50 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ TIMING              │ RENDER            │ ENGINE                 │
//! │ Frame:  20.0ms      │ Frames: 12847     │ Scr:  VERIFIED         │
//! │ Render: 0.5ms       │ Clears: 12        │ Step: 3/3              │
//! │ Sleep:  19.5ms      │ Bkdrp: 12         │ Feed: 7/15             │
//! │ Min:    19.8ms      │ Fades: 340        │ Gen:  4                │
//! │ Max:    25.1ms      │ TiltX: +0.42      │ Fired:48 N:3           │
//! │ Avg:    20.1ms      │ TiltY: -0.10      │ Seed: 42               │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > 2.5s SECURED                                                   │
//! │ > 4.5s PROGRESS                                                  │
//! │ > _                                                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use mockup_common::colors::{BLACK, GRAY, GREEN, RED, WHITE, YELLOW};
use mockup_common::config::{FEED_WINDOW, PROGRESS_STEPS, SCREEN_HEIGHT, SCREEN_WIDTH};
use mockup_common::profiling::DebugLog;
use mockup_common::styles::LABEL_FONT;

use super::MockupView;
use crate::profiling::ProfilingMetrics;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position where stats section headers start
const SECTION_HEADER_Y: i32 = 28;

/// Y position where stats values start
const STATS_Y: i32 = 40;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 122;

/// Y position where log terminal starts
const LOG_Y: i32 = 132;

const LOG_LINE_HEIGHT: i32 = 11;

const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;

const STAT_LINE_HEIGHT: i32 = 13;

/// Frame time above this is shown yellow, above twice this red.
const SLOW_FRAME_US: u32 = 22_000;

// =============================================================================
// Colors
// =============================================================================

const DEBUG_BG: Rgb565 = BLACK;
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Very dark green tint behind the log lines.
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);

// =============================================================================
// Debug Page Drawing
// =============================================================================

/// Draw the debug/profiling page.
///
/// Clears the display and renders the header, three stat columns
/// (timing, render counters, engine state) and the log terminal.
pub fn draw_debug_page<D>(
    display: &mut D,
    view: &MockupView<'_>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();

    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_render_column(display, view, metrics);
    draw_engine_column(display, view, metrics);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log, view.accent);
}

fn draw_header<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let uptime = metrics.uptime_string();
    let mut uptime_str: String<24> = String::new();
    let _ = write!(uptime_str, "UP {uptime}");
    Text::new(&uptime_str, Point::new(160, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(266, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    for (label, x) in [("TIMING", COL1_X), ("RENDER", COL2_X), ("ENGINE", COL3_X)] {
        Text::new(label, Point::new(x, SECTION_HEADER_Y), style)
            .draw(display)
            .ok();
    }
}

/// Frame timing statistics (left column).
fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);
    let frame_style = MonoTextStyle::new(LABEL_FONT, frame_time_color(metrics.frame_time_us));

    let rows = [
        ("Frame: ", metrics.frame_time_us, frame_style),
        ("Render:", metrics.render_time_us, value_style),
        ("Sleep: ", metrics.sleep_time_us, value_style),
        ("Min:   ", metrics.frame_time_min_or_zero_us(), highlight_style),
        ("Max:   ", metrics.frame_time_max_us, highlight_style),
        ("Avg:   ", metrics.frame_time_avg_us(), highlight_style),
    ];

    let mut y = STATS_Y;
    for (label, us, style) in rows {
        let mut s: String<20> = String::new();
        let _ = write!(s, "{label}{:.1}ms", us as f32 / 1000.0);
        Text::new(&s, Point::new(COL1_X, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

/// Render counters (middle column).
fn draw_render_column<D>(
    display: &mut D,
    view: &MockupView<'_>,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let x = COL2_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Frames:{}", metrics.total_frames);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Clears:{}", metrics.display_clears);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Bkdrp: {}", metrics.backdrop_redraws);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Fades: {}", metrics.accent_fade_frames);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "TiltX: {:+.2}", view.tilt.nx);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "TiltY: {:+.2}", view.tilt.ny);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

/// Sequencer, stepper and feed state (right column).
fn draw_engine_column<D>(
    display: &mut D,
    view: &MockupView<'_>,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let accent_style = MonoTextStyle::new(LABEL_FONT, view.accent);
    let x = COL3_X;
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Scr:  {}", view.screen.label());
    Text::new(&s, Point::new(x, y), accent_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Step: {}/{}", view.stepper.step(), PROGRESS_STEPS);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Feed: {}/{}", view.feed.len(), FEED_WINDOW);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Gen:  {}", view.feed.generated());
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Fired:{} N:{}", metrics.timers_fired, metrics.manual_advances);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Seed: {}", view.seed);
    Text::new(&s, Point::new(x, y), value_style).draw(display).ok();
}

/// Debug log lines with a shell-style prompt.
fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
    text_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);
    let text_style = MonoTextStyle::new(LABEL_FONT, text_color);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for line in log.iter() {
        Text::new(">", Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 10, y), text_style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}

/// Green at target, yellow when slow, red when a frame was missed.
const fn frame_time_color(frame_time_us: u32) -> Rgb565 {
    if frame_time_us > 2 * SLOW_FRAME_US {
        RED
    } else if frame_time_us > SLOW_FRAME_US {
        YELLOW
    } else {
        GREEN
    }
}

#[cfg(test)]
mod tests {
    use mockup_common::profiling::LOG_BUFFER_SIZE;

    use super::*;

    #[test]
    fn test_frame_time_color() {
        assert_eq!(frame_time_color(20_000), GREEN);
        assert_eq!(frame_time_color(30_000), YELLOW);
        assert_eq!(frame_time_color(50_000), RED);
    }

    #[test]
    fn test_log_fits_below_divider() {
        // Full log plus the cursor line
        let last_baseline = LOG_Y + LOG_LINE_HEIGHT * LOG_BUFFER_SIZE as i32;
        assert!(last_baseline <= SCREEN_HEIGHT as i32, "Cursor line must stay on screen: {last_baseline}");
    }
}
