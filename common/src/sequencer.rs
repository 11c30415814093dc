//! Screen sequencer: the single source of truth for the mockup.
//!
//! The sequencer owns every timer of the mockup:
//!
//! | Timer | Owner | Armed | Cancelled |
//! |-------|-------|-------|-----------|
//! | Screen dwell | sequencer | on every screen entry | on manual advance, unmount |
//! | Progress step | [`ProgressStepper`] | on Progress entry | on Progress exit, unmount |
//! | Feed generation | [`SettlementFeed`] | on Verified entry | on Verified exit, unmount |
//!
//! # Clock
//!
//! Time is passed in as milliseconds. [`Sequencer::advance_to`] fires every
//! timer due at or before `now_ms` in (due time, scheduling order), each at
//! its own due time. A frame loop observing the clock late, or a test jumping
//! the clock ahead, sees exactly what a real event loop would have done.
//!
//! Due times saturate at `u64::MAX`. A timer rearmed onto that last
//! millisecond during a call waits for the next call, so every call
//! terminates.
//!
//! # Teardown
//!
//! [`Sequencer::unmount`] cancels every pending timer and clears the feed.
//! After that, `advance_to` and `next` do nothing until the next `mount`.

use rand::RngCore;

use crate::feed::SettlementFeed;
use crate::screen::ScreenState;
use crate::stepper::ProgressStepper;
use crate::timer::{Deadline, TimerSequence, TimerSlot};

/// Which timer a pending deadline belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TimerSource {
    Dwell,
    Step,
    Feed,
}

/// Drives the five-screen cycle and its nested timers.
pub struct Sequencer<R> {
    screen: ScreenState,
    entered_ms: u64,
    dwell: TimerSlot,
    stepper: ProgressStepper,
    feed: SettlementFeed,
    seq: TimerSequence,
    rng: R,
    mounted: bool,
    transitions: u32,
}

impl<R: RngCore> Sequencer<R> {
    /// Create an unmounted sequencer. Nothing runs until [`Self::mount`].
    pub const fn new(rng: R) -> Self {
        Self {
            screen: ScreenState::Transaction,
            entered_ms: 0,
            dwell: TimerSlot::new(),
            stepper: ProgressStepper::new(),
            feed: SettlementFeed::new(),
            seq: TimerSequence::new(),
            rng,
            mounted: false,
            transitions: 0,
        }
    }

    /// Start the cycle at `Transaction`. No-op when already mounted.
    pub fn mount(
        &mut self,
        now_ms: u64,
    ) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.transitions = 0;
        self.screen = ScreenState::Transaction;
        self.entered_ms = now_ms;
        self.dwell.arm(now_ms, self.screen.dwell_ms(), &mut self.seq);
        log::debug!("mounted at {now_ms}ms on {}", self.screen.label());
    }

    /// Cancel every pending timer and clear nested state. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.dwell.cancel();
        self.stepper.stop();
        self.feed.stop();
        log::debug!("unmounted on {}", self.screen.label());
    }

    /// Manual "Next": advance immediately and restart the dwell timer.
    ///
    /// The pending dwell timer is replaced, so it can never fire for the
    /// screen that was skipped. Callers should bring the clock up to date
    /// with [`Self::advance_to`] first.
    pub fn next(
        &mut self,
        now_ms: u64,
    ) {
        if !self.mounted {
            return;
        }
        log::debug!("manual advance from {}", self.screen.label());
        self.enter(self.screen.advance(), now_ms);
    }

    /// Fire every timer due at or before `now_ms`, earliest first.
    ///
    /// Returns the number of timers fired.
    pub fn advance_to(
        &mut self,
        now_ms: u64,
    ) -> u32 {
        let armed_before = self.seq.last();
        let mut fired = 0;
        while self.mounted {
            let Some((deadline, source)) = self.next_deadline() else {
                break;
            };
            if deadline.due_ms > now_ms {
                break;
            }
            // Saturated deadline rearmed by this call
            if deadline.due_ms == u64::MAX && deadline.seq > armed_before {
                break;
            }

            match source {
                TimerSource::Dwell => {
                    self.dwell.cancel();
                    self.enter(self.screen.advance(), deadline.due_ms);
                }
                TimerSource::Step => {
                    self.stepper.fire_due(deadline.due_ms, &mut self.seq);
                }
                TimerSource::Feed => {
                    self.feed.fire_due(deadline.due_ms, &mut self.rng, &mut self.seq);
                }
            }
            fired += 1;
        }
        fired
    }

    /// Earliest pending deadline across all owned timers.
    fn next_deadline(&self) -> Option<(Deadline, TimerSource)> {
        [
            self.dwell.deadline().map(|d| (d, TimerSource::Dwell)),
            self.stepper.deadline().map(|d| (d, TimerSource::Step)),
            self.feed.deadline().map(|d| (d, TimerSource::Feed)),
        ]
        .into_iter()
        .flatten()
        .min_by_key(|(deadline, _)| *deadline)
    }

    /// Leave the current screen and enter `next` at `now_ms`.
    fn enter(
        &mut self,
        next: ScreenState,
        now_ms: u64,
    ) {
        match self.screen {
            ScreenState::Progress => self.stepper.stop(),
            ScreenState::Verified => self.feed.stop(),
            _ => {}
        }

        let previous = self.screen;
        self.screen = next;
        self.entered_ms = now_ms;
        self.transitions = self.transitions.wrapping_add(1);
        self.dwell.arm(now_ms, next.dwell_ms(), &mut self.seq);

        match next {
            ScreenState::Progress => self.stepper.start(now_ms, &mut self.seq),
            ScreenState::Verified => self.feed.start(now_ms, &mut self.seq),
            _ => {}
        }

        log::debug!("{} -> {} at {now_ms}ms", previous.label(), next.label());
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn screen(&self) -> ScreenState { self.screen }

    /// Progress step; 0 outside the Progress screen.
    #[inline]
    pub const fn progress_step(&self) -> u8 {
        match self.screen {
            ScreenState::Progress => self.stepper.step(),
            _ => 0,
        }
    }

    #[inline]
    pub const fn stepper(&self) -> &ProgressStepper { &self.stepper }

    #[inline]
    pub const fn feed(&self) -> &SettlementFeed { &self.feed }

    #[inline]
    pub const fn is_mounted(&self) -> bool { self.mounted }

    /// Screen changes since the last mount.
    #[inline]
    pub const fn transitions(&self) -> u32 { self.transitions }

    /// Milliseconds spent on the current screen.
    #[inline]
    pub const fn screen_elapsed(
        &self,
        now_ms: u64,
    ) -> u64 {
        now_ms.saturating_sub(self.entered_ms)
    }

    /// Fraction of the current dwell elapsed (0.0-1.0).
    pub fn screen_progress(
        &self,
        now_ms: u64,
    ) -> f32 {
        let dwell = self.screen.dwell_ms();
        (self.screen_elapsed(now_ms) as f32 / dwell as f32).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
