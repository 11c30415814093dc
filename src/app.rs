//! Host application state shared by the window loop and headless capture.
//!
//! `App` owns the sequencer plus everything that only matters for display:
//! pointer tracking, tilt smoothing, the accent fade, render tracking, the
//! current page, the debug log and the profiling counters. Both front ends
//! drive it the same way:
//!
//! 1. [`App::tick`] with the current clock
//! 2. input handlers ([`App::press_next`], [`App::click`], pointer moves)
//! 3. [`App::draw`]
//!
//! The clock is always passed in, so headless capture can run on a simulated
//! clock and produce the same frames as a real-time window.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use mockup_common::animations::{AccentFade, TiltSmoother};
use mockup_common::colors::{BACKDROP, accent_for};
use mockup_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use mockup_common::profiling::DebugLog;
use mockup_common::render::RenderState;
use mockup_common::{Page, PointerTracker, ScreenState, Sequencer};
use rand::RngCore;

use crate::profiling::ProfilingMetrics;
use crate::screens::{MockupView, PHONE_BOUNDS, draw_debug_page, draw_phone};
use crate::widgets::{draw_backdrop, draw_dwell_bar, draw_fps, draw_next_button, hit_next_button};

/// Pointer samples this close to the window border may be the last before
/// the cursor leaves the window.
const POINTER_EDGE_PX: u32 = 12;

/// Quiet time after an edge sample before the pointer counts as gone.
const POINTER_EXIT_MS: u64 = 150;

pub struct App<R> {
    sequencer: Sequencer<R>,
    seed: u64,

    // Presentation
    pointer: PointerTracker,
    pointer_seen_ms: u64,
    pointer_at_edge: bool,
    tilt: TiltSmoother,
    accent: AccentFade,
    render_state: RenderState,
    page: Page,
    frame: u32,

    // Observed engine state, for logging changes
    last_transitions: u32,
    last_step: u8,
    last_generated: u32,

    // Profiling
    debug_log: DebugLog,
    metrics: ProfilingMetrics,
}

impl<R: RngCore> App<R> {
    /// `seed` is only displayed; the caller seeds `rng` with it.
    pub fn new(
        rng: R,
        seed: u64,
    ) -> Self {
        Self {
            sequencer: Sequencer::new(rng),
            seed,
            pointer: PointerTracker::new(),
            pointer_seen_ms: 0,
            pointer_at_edge: false,
            tilt: TiltSmoother::new(),
            accent: AccentFade::new(accent_for(ScreenState::Transaction)),
            render_state: RenderState::new(),
            page: Page::default(),
            frame: 0,
            last_transitions: 0,
            last_step: 0,
            last_generated: 0,
            debug_log: DebugLog::new(),
            metrics: ProfilingMetrics::new(),
        }
    }

    /// Start the cycle on the Transaction screen.
    pub fn mount(
        &mut self,
        now_ms: u64,
    ) {
        if self.sequencer.is_mounted() {
            return;
        }
        self.sequencer.mount(now_ms);
        self.last_transitions = self.sequencer.transitions();
        self.last_step = 0;
        self.last_generated = 0;

        let screen = self.sequencer.screen();
        self.accent.snap_to(accent_for(screen));
        self.debug_log.push_at(now_ms, "MOUNT");
        self.debug_log.push_at(now_ms, screen.label());
        log::info!("mounted, seed {}", self.seed);
    }

    /// Stop every timer. Nothing changes afterwards until the next mount.
    pub fn unmount(&mut self) {
        if !self.sequencer.is_mounted() {
            return;
        }
        self.sequencer.unmount();
        self.debug_log.push("UNMOUNT");
        log::info!("unmounted after {} transitions", self.sequencer.transitions());
    }

    /// Bring the engine up to `now_ms`. Returns the number of timers fired.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> u32 {
        let fired = self.sequencer.advance_to(now_ms);
        self.metrics.add_timers_fired(fired);
        self.observe(now_ms);
        fired
    }

    /// Log screen, step and feed changes since the last observation.
    fn observe(
        &mut self,
        now_ms: u64,
    ) {
        let transitions = self.sequencer.transitions();
        if transitions != self.last_transitions {
            self.last_transitions = transitions;
            let screen = self.sequencer.screen();
            let entered_ms = now_ms - self.sequencer.screen_elapsed(now_ms);
            self.accent.set_target(accent_for(screen));
            self.debug_log.push_at(entered_ms, screen.label());
            log::info!("{} at {entered_ms}ms", screen.label());
        }

        let step = self.sequencer.progress_step();
        if step != self.last_step {
            self.last_step = step;
            if step > 0 {
                log::debug!("progress step {step}");
            }
        }

        let feed = self.sequencer.feed();
        let generated = feed.generated();
        if generated != self.last_generated {
            self.last_generated = generated;
            if let Some(record) = feed.latest().filter(|_| generated > 0) {
                self.debug_log.push_at(now_ms, record.id());
                log::debug!("settlement {} {} ({} in window)", record.id(), record.amount(), feed.len());
            }
        }
    }

    /// Draw the current page.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        now_ms: u64,
        fps: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let screen = self.sequencer.screen();
        self.render_state.update_screen(screen);
        self.render_state.update_page(self.page);

        if self.render_state.needs_clear() {
            display.clear(BACKDROP).ok();
            self.render_state.mark_display_cleared();
            self.metrics.inc_display_clears();
        }

        if self.accent.update() {
            self.metrics.inc_accent_fade_frames();
        }
        self.tilt.update(self.pointer.offset());

        let view = MockupView {
            screen,
            stepper: self.sequencer.stepper(),
            feed: self.sequencer.feed(),
            accent: self.accent.current(),
            tilt: self.tilt.current(),
            frame: self.frame,
            screen_progress: self.sequencer.screen_progress(now_ms),
            seed: self.seed,
        };

        match self.page {
            Page::Mockup => {
                if self.render_state.need_backdrop() {
                    draw_backdrop(display, screen);
                    self.render_state.mark_backdrop_drawn();
                    self.metrics.inc_backdrop_redraws();
                }
                draw_phone(display, &view);
                draw_dwell_bar(display, view.screen_progress, view.accent);
                draw_next_button(display, view.accent);
                if self.render_state.check_fps_dirty(fps) {
                    draw_fps(display, fps);
                }
            }
            Page::Debug => draw_debug_page(display, &view, &self.metrics, &self.debug_log, fps),
        }

        self.render_state.end_frame();
        self.frame = self.frame.wrapping_add(1);
    }

    #[inline]
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        self.metrics.record_frame(total_time, render_time, sleep_time);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn sequencer(&self) -> &Sequencer<R> { &self.sequencer }
}

// Input handlers, driven by the window loop
#[cfg_attr(not(feature = "window"), allow(dead_code))]
impl<R: RngCore> App<R> {
    /// Manual advance, as from the Next button or `N`/`Space`.
    pub fn press_next(
        &mut self,
        now_ms: u64,
    ) {
        if !self.sequencer.is_mounted() {
            return;
        }
        // Timers due before the press fire first
        self.tick(now_ms);
        self.sequencer.next(now_ms);
        self.metrics.inc_manual_advances();
        self.observe(now_ms);
    }

    /// Handle a left click. Returns `true` if it hit the Next button.
    pub fn click(
        &mut self,
        point: Point,
        now_ms: u64,
    ) -> bool {
        if self.page != Page::Mockup || !hit_next_button(point) {
            return false;
        }
        self.press_next(now_ms);
        true
    }

    pub fn pointer_moved(
        &mut self,
        point: Point,
        now_ms: u64,
    ) {
        self.pointer.on_move(point, PHONE_BOUNDS);
        self.pointer_seen_ms = now_ms;

        let window = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        self.pointer_at_edge = !window.offset(-(POINTER_EDGE_PX as i32)).contains(point);
    }

    /// Release the tilt when the cursor has left the window.
    ///
    /// SDL stops sending motion once the cursor is outside the window, so
    /// the last sample can still be over the phone. A pointer last seen at
    /// the window border that stays quiet for [`POINTER_EXIT_MS`] has left.
    pub fn pointer_idle(
        &mut self,
        now_ms: u64,
    ) {
        if self.pointer.is_inside()
            && self.pointer_at_edge
            && now_ms.saturating_sub(self.pointer_seen_ms) >= POINTER_EXIT_MS
        {
            self.pointer.on_leave();
            log::debug!("pointer left the window");
        }
    }

    pub fn toggle_page(&mut self) {
        self.page = self.page.toggle();
        self.debug_log.push(match self.page {
            Page::Mockup => "Page: Mockup",
            Page::Debug => "Page: Debug",
        });
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;
    use mockup_common::colors::{ESCROW_AMBER, TRANSFER_BLUE};
    use mockup_common::config::{CYCLE_MS, DWELL_TRANSACTION_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn app() -> App<SmallRng> { App::new(SmallRng::seed_from_u64(7), 7) }

    fn display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn next_button_center() -> Point {
        use mockup_common::config::{NEXT_BUTTON_HEIGHT, NEXT_BUTTON_WIDTH, NEXT_BUTTON_X, NEXT_BUTTON_Y};
        Point::new(
            NEXT_BUTTON_X + NEXT_BUTTON_WIDTH as i32 / 2,
            NEXT_BUTTON_Y + NEXT_BUTTON_HEIGHT as i32 / 2,
        )
    }

    // -------------------------------------------------------------------------
    // Engine driving
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_follows_dwell() {
        let mut app = app();
        app.mount(0);
        assert_eq!(app.tick(DWELL_TRANSACTION_MS - 1), 0, "Nothing due yet");
        assert_eq!(app.tick(DWELL_TRANSACTION_MS), 1);
        assert_eq!(app.sequencer().screen(), ScreenState::Secured);
        assert_eq!(app.metrics.timers_fired, 1);
    }

    #[test]
    fn test_click_on_next_button_advances() {
        let mut app = app();
        app.mount(0);

        assert!(app.click(next_button_center(), 100), "Click lands on the button");
        assert_eq!(app.sequencer().screen(), ScreenState::Secured);
        assert_eq!(app.metrics.manual_advances, 1);

        assert!(!app.click(Point::new(160, 120), 200), "Phone is not the button");
        assert_eq!(app.sequencer().screen(), ScreenState::Secured);
    }

    #[test]
    fn test_click_ignored_on_debug_page() {
        let mut app = app();
        app.mount(0);
        app.toggle_page();
        assert_eq!(app.page, Page::Debug);
        assert!(!app.click(next_button_center(), 100));
        assert_eq!(app.sequencer().screen(), ScreenState::Transaction);
    }

    #[test]
    fn test_press_next_fires_due_timers_first() {
        let mut app = app();
        app.mount(0);
        // Transaction would have ended at 2500; the press at 2600 lands on Secured
        app.press_next(DWELL_TRANSACTION_MS + 100);
        assert_eq!(app.sequencer().screen(), ScreenState::Progress);
    }

    #[test]
    fn test_unmount_freezes_app() {
        let mut app = app();
        app.mount(0);
        app.unmount();
        assert_eq!(app.tick(CYCLE_MS * 3), 0, "No timer fires after unmount");
        app.press_next(CYCLE_MS * 3);
        assert_eq!(app.sequencer().screen(), ScreenState::Transaction);
        assert_eq!(app.metrics.manual_advances, 0);
    }

    // -------------------------------------------------------------------------
    // Logging and accent
    // -------------------------------------------------------------------------

    #[test]
    fn test_screen_changes_are_logged() {
        let mut app = app();
        app.mount(0);
        app.tick(DWELL_TRANSACTION_MS);
        let lines: Vec<&str> = app.debug_log.iter().collect();
        assert_eq!(lines, ["0.0s MOUNT", "0.0s TRANSACTION", "2.5s SECURED"]);
    }

    #[test]
    fn test_accent_fades_to_new_screen() {
        let mut app = app();
        let mut display = display();
        app.mount(0);
        assert_eq!(app.accent.current(), TRANSFER_BLUE);

        app.tick(DWELL_TRANSACTION_MS);
        for _ in 0..100 {
            app.draw(&mut display, DWELL_TRANSACTION_MS, 50.0);
        }
        assert_eq!(app.accent.current(), ESCROW_AMBER, "Fade converges exactly");
        assert!(app.metrics.accent_fade_frames > 0);
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_clears_on_screen_change_and_page_switch() {
        let mut app = app();
        let mut display = display();
        app.mount(0);

        app.draw(&mut display, 0, 50.0);
        app.draw(&mut display, 20, 50.0);
        assert_eq!(app.metrics.display_clears, 1, "Only the first frame clears");

        app.tick(DWELL_TRANSACTION_MS);
        app.draw(&mut display, DWELL_TRANSACTION_MS, 50.0);
        assert_eq!(app.metrics.display_clears, 2, "Screen change clears");

        app.toggle_page();
        app.draw(&mut display, DWELL_TRANSACTION_MS + 20, 50.0);
        assert_eq!(app.metrics.display_clears, 3, "Page switch clears");
        assert_eq!(app.metrics.backdrop_redraws, 2, "Debug page has no backdrop");
    }

    #[test]
    fn test_pointer_outside_phone_is_neutral() {
        let mut app = app();
        app.pointer_moved(Point::new(PHONE_BOUNDS.top_left.x + 1, PHONE_BOUNDS.top_left.y + 1), 0);
        assert!(app.pointer.is_inside());
        app.pointer_moved(Point::new(2, 2), 10);
        assert!(!app.pointer.is_inside(), "Leaving the phone resets the tilt");
        assert!(app.pointer.offset().is_neutral());
    }

    #[test]
    fn test_pointer_quiet_at_window_border_leaves() {
        let mut app = app();
        // Over the phone, within the border strip at the top of the window
        let last_seen = Point::new(PHONE_BOUNDS.top_left.x + 20, PHONE_BOUNDS.top_left.y + 1);
        app.pointer_moved(last_seen, 1000);
        assert!(app.pointer.is_inside());
        assert!(!app.pointer.offset().is_neutral());

        app.pointer_idle(1000 + POINTER_EXIT_MS - 1);
        assert!(app.pointer.is_inside(), "Short pause keeps the tilt");

        app.pointer_idle(1000 + POINTER_EXIT_MS);
        assert!(!app.pointer.is_inside(), "No motion after a border sample means the cursor left");
        assert!(app.pointer.offset().is_neutral());
    }

    #[test]
    fn test_pointer_resting_over_phone_keeps_tilt() {
        let mut app = app();
        let center = PHONE_BOUNDS.center() + Point::new(20, 20);
        app.pointer_moved(center, 1000);

        app.pointer_idle(60_000);
        assert!(app.pointer.is_inside(), "A still cursor away from the border stays");
        assert!(!app.pointer.offset().is_neutral());
    }
}
