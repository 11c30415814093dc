//! Synthetic settlement feed shown on the Verified screen.
//!
//! # Lifecycle
//!
//! - [`SettlementFeed::start`] installs three fixed seed records and schedules
//!   the first generated record [`FEED_FIRST_DELAY_MS`] later.
//! - Each generation prepends one record and schedules the next one after a
//!   random delay in `[FEED_INTERVAL_MIN_MS, FEED_INTERVAL_MAX_MS)`.
//! - [`SettlementFeed::stop`] cancels the pending generation and clears the
//!   window.
//!
//! # Rolling Window
//!
//! Records live in a `heapless::Deque` with capacity [`FEED_WINDOW`], newest
//! at the front. Inserting into a full window evicts the oldest record first,
//! so the window can never grow past 15 entries.
//!
//! # Randomness
//!
//! The feed never touches a global RNG: every generation draws from the
//! `RngCore` passed in by the owner, so a seeded generator reproduces the
//! exact same ids, amounts and intervals.

use heapless::{Deque, String};
use rand::{Rng, RngCore};

use crate::config::{FEED_FIRST_DELAY_MS, FEED_INTERVAL_MAX_MS, FEED_INTERVAL_MIN_MS, FEED_WINDOW};
use crate::timer::{Deadline, TimerSequence, TimerSlot};

/// Capacity of a record id (`"BLP-XXXX...YYYY"` is 15 bytes).
pub const ID_CAPACITY: usize = 16;

/// Prefix of every settlement id.
pub const ID_PREFIX: &str = "BLP-";

/// Separator between the two random halves of an id.
pub const ID_SEPARATOR: &str = "...";

/// Random characters on each side of the separator.
pub const ID_HALF_LEN: usize = 4;

/// Characters ids are drawn from.
const ID_ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Corridor shown on every record.
pub const CURRENCY_PAIR: &str = "USDT → AED";

/// Age label of freshly generated records. Never recomputed.
pub const AGE_JUST_NOW: &str = "just now";

/// Candidate amounts for generated records.
pub const AMOUNTS: [&str; 12] = [
    "1,250.00",
    "320.75",
    "4,800.00",
    "675.20",
    "12,500.00",
    "2,150.40",
    "980.00",
    "7,340.60",
    "150.25",
    "3,600.00",
    "560.90",
    "9,125.00",
];

/// Seed records installed on every start: (id, amount, age), newest first.
pub const SEED_RECORDS: [(&str, &str, &str); 3] = [
    ("BLP-7x2K...9fN3", "2,450.00", "2s"),
    ("BLP-4mR8...2hL5", "890.50", "14s"),
    ("BLP-9pT4...6wM2", "5,200.00", "18s"),
];

/// One simulated settlement confirmation. Immutable once created.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettlementRecord {
    id: String<ID_CAPACITY>,
    amount: &'static str,
    currency_pair: &'static str,
    age: &'static str,
}

impl SettlementRecord {
    fn seed(
        id: &str,
        amount: &'static str,
        age: &'static str,
    ) -> Self {
        let mut stored: String<ID_CAPACITY> = String::new();
        stored.push_str(id).ok();
        Self {
            id: stored,
            amount,
            currency_pair: CURRENCY_PAIR,
            age,
        }
    }

    #[inline]
    pub fn id(&self) -> &str { self.id.as_str() }

    #[inline]
    pub const fn amount(&self) -> &'static str { self.amount }

    #[inline]
    pub const fn currency_pair(&self) -> &'static str { self.currency_pair }

    #[inline]
    pub const fn age(&self) -> &'static str { self.age }
}

/// Build a random id of the form `BLP-XXXX...YYYY`.
pub fn generate_id<R: RngCore + ?Sized>(rng: &mut R) -> String<ID_CAPACITY> {
    let mut id: String<ID_CAPACITY> = String::new();
    id.push_str(ID_PREFIX).ok();
    push_random_chars(&mut id, rng);
    id.push_str(ID_SEPARATOR).ok();
    push_random_chars(&mut id, rng);
    id
}

fn push_random_chars<R: RngCore + ?Sized>(
    id: &mut String<ID_CAPACITY>,
    rng: &mut R,
) {
    for _ in 0..ID_HALF_LEN {
        let c = ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())];
        id.push(char::from(c)).ok();
    }
}

/// Generate one record with a random id and amount.
pub fn generate_record<R: RngCore + ?Sized>(rng: &mut R) -> SettlementRecord {
    let id = generate_id(rng);
    let amount = AMOUNTS[rng.gen_range(0..AMOUNTS.len())];
    SettlementRecord {
        id,
        amount,
        currency_pair: CURRENCY_PAIR,
        age: AGE_JUST_NOW,
    }
}

/// Rolling window of settlement records plus its generation timer.
pub struct SettlementFeed {
    records: Deque<SettlementRecord, FEED_WINDOW>,
    timer: TimerSlot,
    running: bool,
    generated: u32,
}

impl SettlementFeed {
    pub const fn new() -> Self {
        Self {
            records: Deque::new(),
            timer: TimerSlot::new(),
            running: false,
            generated: 0,
        }
    }

    /// Install the seed records and schedule the first generation.
    ///
    /// A running feed is stopped first, so there is never more than one
    /// generation chain.
    pub fn start(
        &mut self,
        now_ms: u64,
        seq: &mut TimerSequence,
    ) {
        self.stop();
        for (id, amount, age) in SEED_RECORDS {
            self.records.push_back(SettlementRecord::seed(id, amount, age)).ok();
        }
        self.generated = 0;
        self.running = true;
        self.timer.arm(now_ms, FEED_FIRST_DELAY_MS, seq);
        log::debug!("settlement feed started with {} seed records", self.records.len());
    }

    /// Cancel pending generation and clear the window. No-op when stopped.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.records.clear();
        if self.running {
            self.running = false;
            log::debug!("settlement feed stopped after {} generated", self.generated);
        }
    }

    /// Pending generation deadline, if any.
    #[inline]
    pub const fn deadline(&self) -> Option<Deadline> { self.timer.deadline() }

    /// Generate a record if the pending generation is due at or before `now_ms`.
    ///
    /// The follow-up generation is scheduled from the due time, not from
    /// `now_ms`. Returns `true` when a record was inserted.
    pub fn fire_due<R: RngCore + ?Sized>(
        &mut self,
        now_ms: u64,
        rng: &mut R,
        seq: &mut TimerSequence,
    ) -> bool {
        let Some(deadline) = self.timer.take_if_due(now_ms) else {
            return false;
        };

        let record = generate_record(rng);
        log::trace!("settlement {} {}", record.id(), record.amount());
        self.insert(record);
        self.generated = self.generated.saturating_add(1);

        let delay = rng.gen_range(FEED_INTERVAL_MIN_MS..FEED_INTERVAL_MAX_MS);
        self.timer.arm(deadline.due_ms, delay, seq);
        true
    }

    /// Prepend a record, evicting the oldest when the window is full.
    fn insert(
        &mut self,
        record: SettlementRecord,
    ) {
        if self.records.is_full() {
            self.records.pop_back();
        }
        self.records.push_front(record).ok();
    }

    /// Records, newest first.
    pub fn records(&self) -> impl Iterator<Item = &SettlementRecord> { self.records.iter() }

    /// Most recent record.
    #[inline]
    pub fn latest(&self) -> Option<&SettlementRecord> { self.records.front() }

    #[inline]
    pub fn len(&self) -> usize { self.records.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records generated since the last start (seeds excluded).
    #[inline]
    pub const fn generated(&self) -> u32 { self.generated }
}

impl Default for SettlementFeed {
    fn default() -> Self { Self::new() }
}
