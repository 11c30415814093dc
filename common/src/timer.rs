//! Owned one-shot timers on a caller-supplied millisecond clock.
//!
//! Each state machine owns its timers as plain data. A [`TimerSlot`] is
//! either armed with a [`Deadline`] or empty; cancelling is just clearing
//! the slot, so a cancelled timer can never fire later.
//!
//! # Ordering
//!
//! Deadlines carry a scheduling sequence number from a shared
//! [`TimerSequence`]. When two timers are due at the same millisecond the one
//! scheduled first fires first, like the timer queue of an event loop.

use core::cmp::Ordering;

/// When a timer fires, plus its position in scheduling order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Deadline {
    /// Absolute due time in milliseconds.
    pub due_ms: u64,
    /// Scheduling order, used to break ties between equal due times.
    pub seq: u64,
}

impl Ord for Deadline {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.due_ms.cmp(&other.due_ms).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Deadline {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Monotonic counter handing out scheduling sequence numbers.
#[derive(Default, Debug)]
pub struct TimerSequence(u64);

impl TimerSequence {
    pub const fn new() -> Self { Self(0) }

    /// Next sequence number.
    #[inline]
    pub const fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Last sequence number handed out (0 before the first).
    #[inline]
    pub const fn last(&self) -> u64 { self.0 }
}

/// A single cancellable one-shot timer.
#[derive(Default, Debug)]
pub struct TimerSlot {
    deadline: Option<Deadline>,
}

impl TimerSlot {
    /// Create an empty (unarmed) slot.
    pub const fn new() -> Self { Self { deadline: None } }

    /// Arm the slot to fire at `due_ms`, replacing any pending deadline.
    pub fn arm_at(
        &mut self,
        due_ms: u64,
        seq: &mut TimerSequence,
    ) {
        self.deadline = Some(Deadline {
            due_ms,
            seq: seq.next(),
        });
    }

    /// Arm the slot to fire `delay_ms` after `now_ms`.
    #[inline]
    pub fn arm(
        &mut self,
        now_ms: u64,
        delay_ms: u64,
        seq: &mut TimerSequence,
    ) {
        self.arm_at(now_ms.saturating_add(delay_ms), seq);
    }

    /// Cancel the pending deadline. No-op when unarmed.
    #[inline]
    pub const fn cancel(&mut self) { self.deadline = None; }

    #[inline]
    pub const fn is_armed(&self) -> bool { self.deadline.is_some() }

    /// Pending deadline, if armed.
    #[inline]
    pub const fn deadline(&self) -> Option<Deadline> { self.deadline }

    /// Disarm and return the deadline if it is due at or before `now_ms`.
    pub fn take_if_due(
        &mut self,
        now_ms: u64,
    ) -> Option<Deadline> {
        match self.deadline {
            Some(deadline) if deadline.due_ms <= now_ms => self.deadline.take(),
            _ => None,
        }
    }
}
