//! The five screens of the transaction lifecycle mockup.
//!
//! # Cycle
//!
//! ```text
//! Transaction ─▶ Secured ─▶ Progress ─▶ Complete ─▶ Verified
//!      ▲                                               │
//!      └───────────────────────────────────────────────┘
//! ```
//!
//! The cycle has no terminal state. Each screen stays up for a fixed dwell
//! time from [`crate::config`] before the sequencer advances it.

use crate::config::{
    DWELL_COMPLETE_MS,
    DWELL_PROGRESS_MS,
    DWELL_SECURED_MS,
    DWELL_TRANSACTION_MS,
    DWELL_VERIFIED_MS,
};

/// Number of screens in the cycle.
pub const SCREEN_COUNT: usize = 5;

/// One screen of the lifecycle mockup.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum ScreenState {
    /// Payment summary: amount, corridor, confirm button.
    #[default]
    Transaction,
    /// Funds locked in escrow.
    Secured,
    /// Three-step settlement progress.
    Progress,
    /// Payout delivered.
    Complete,
    /// Live feed of settlement confirmations.
    Verified,
}

impl ScreenState {
    /// All screens in cycle order.
    pub const ALL: [Self; SCREEN_COUNT] = [
        Self::Transaction,
        Self::Secured,
        Self::Progress,
        Self::Complete,
        Self::Verified,
    ];

    /// Next screen in the cycle.
    #[inline]
    pub const fn advance(self) -> Self {
        match self {
            Self::Transaction => Self::Secured,
            Self::Secured => Self::Progress,
            Self::Progress => Self::Complete,
            Self::Complete => Self::Verified,
            Self::Verified => Self::Transaction,
        }
    }

    /// How long this screen stays up before auto-advancing.
    #[inline]
    pub const fn dwell_ms(self) -> u64 {
        match self {
            Self::Transaction => DWELL_TRANSACTION_MS,
            Self::Secured => DWELL_SECURED_MS,
            Self::Progress => DWELL_PROGRESS_MS,
            Self::Complete => DWELL_COMPLETE_MS,
            Self::Verified => DWELL_VERIFIED_MS,
        }
    }

    /// Position in the cycle (0-4), used for the pagination dots.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Transaction => 0,
            Self::Secured => 1,
            Self::Progress => 2,
            Self::Complete => 3,
            Self::Verified => 4,
        }
    }

    /// Short uppercase label for captions and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transaction => "TRANSACTION",
            Self::Secured => "SECURED",
            Self::Progress => "PROGRESS",
            Self::Complete => "COMPLETE",
            Self::Verified => "VERIFIED",
        }
    }

    /// Lowercase identifier, safe for file names.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Secured => "secured",
            Self::Progress => "progress",
            Self::Complete => "complete",
            Self::Verified => "verified",
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::CYCLE_MS;

    #[test]
    fn test_screen_default() {
        assert_eq!(ScreenState::default(), ScreenState::Transaction);
    }

    #[test]
    fn test_advance_order() {
        assert_eq!(ScreenState::Transaction.advance(), ScreenState::Secured);
        assert_eq!(ScreenState::Secured.advance(), ScreenState::Progress);
        assert_eq!(ScreenState::Progress.advance(), ScreenState::Complete);
        assert_eq!(ScreenState::Complete.advance(), ScreenState::Verified);
        assert_eq!(ScreenState::Verified.advance(), ScreenState::Transaction);
    }

    #[test]
    fn test_five_advances_from_transaction() {
        let mut screen = ScreenState::Transaction;
        for _ in 0..5 {
            screen = screen.advance();
        }
        assert_eq!(screen, ScreenState::Transaction, "Five advances must close the cycle");
    }

    #[test]
    fn test_dwell_times() {
        assert_eq!(ScreenState::Transaction.dwell_ms(), 2500);
        assert_eq!(ScreenState::Secured.dwell_ms(), 2000);
        assert_eq!(ScreenState::Progress.dwell_ms(), 3500);
        assert_eq!(ScreenState::Complete.dwell_ms(), 2500);
        assert_eq!(ScreenState::Verified.dwell_ms(), 3000);

        let total: u64 = ScreenState::ALL.iter().map(|s| s.dwell_ms()).sum();
        assert_eq!(total, CYCLE_MS);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, screen) in ScreenState::ALL.iter().enumerate() {
            assert_eq!(screen.index(), i, "{screen:?} index");
            assert_eq!(
                screen.advance().index(),
                (i + 1) % SCREEN_COUNT,
                "{screen:?} advances to the next index"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_advance_is_cyclic(start in 0usize..SCREEN_COUNT, extra in 0usize..50) {
            let start = ScreenState::ALL[start];
            let mut screen = start;
            for _ in 0..extra {
                screen = screen.advance();
            }
            prop_assert_eq!(screen.index(), (start.index() + extra) % SCREEN_COUNT);

            for _ in 0..SCREEN_COUNT {
                screen = screen.advance();
            }
            prop_assert_eq!(screen.index(), (start.index() + extra) % SCREEN_COUNT);
        }
    }
}
