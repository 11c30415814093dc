//! Progress sub-stepper nested inside the Progress screen.
//!
//! On entry the counter reads 0, then completes step 1 immediately, step 2
//! at +1500ms and step 3 at +3000ms (offsets from [`crate::config`]). Only
//! one step timer is pending at a time; each firing arms the next offset
//! relative to the entry time, so late observation never shifts the
//! schedule.
//!
//! Stopping (screen exit, manual advance, unmount) resets the counter and
//! cancels the pending step.

use crate::config::{PROGRESS_STEPS, PROGRESS_STEP_OFFSETS_MS};
use crate::timer::{Deadline, TimerSequence, TimerSlot};

/// Three-step counter driving the Progress screen checkmarks.
#[derive(Default, Debug)]
pub struct ProgressStepper {
    step: u8,
    entered_ms: u64,
    timer: TimerSlot,
}

impl ProgressStepper {
    pub const fn new() -> Self {
        Self {
            step: 0,
            entered_ms: 0,
            timer: TimerSlot::new(),
        }
    }

    /// Restart from 0 and schedule the first step.
    pub fn start(
        &mut self,
        now_ms: u64,
        seq: &mut TimerSequence,
    ) {
        self.step = 0;
        self.entered_ms = now_ms;
        self.timer.arm(now_ms, PROGRESS_STEP_OFFSETS_MS[0], seq);
    }

    /// Reset to 0 and cancel any pending step.
    pub const fn stop(&mut self) {
        self.step = 0;
        self.timer.cancel();
    }

    /// Pending step deadline, if any.
    #[inline]
    pub const fn deadline(&self) -> Option<Deadline> { self.timer.deadline() }

    /// Fire the pending step if it is due at or before `now_ms`.
    ///
    /// Returns `true` when the counter advanced.
    pub fn fire_due(
        &mut self,
        now_ms: u64,
        seq: &mut TimerSequence,
    ) -> bool {
        if self.timer.take_if_due(now_ms).is_none() {
            return false;
        }

        self.step = (self.step + 1).min(PROGRESS_STEPS);
        if let Some(offset) = PROGRESS_STEP_OFFSETS_MS.get(self.step as usize) {
            self.timer.arm_at(self.entered_ms.saturating_add(*offset), seq);
        }
        log::trace!("progress step {}", self.step);
        true
    }

    /// Current step (0 = nothing complete, 3 = all complete).
    #[inline]
    pub const fn step(&self) -> u8 { self.step }

    #[inline]
    pub const fn is_complete(&self) -> bool { self.step >= PROGRESS_STEPS }

    /// Fraction of steps complete (0.0-1.0), for the progress bar.
    #[inline]
    pub fn fraction(&self) -> f32 { f32::from(self.step) / f32::from(PROGRESS_STEPS) }
}
