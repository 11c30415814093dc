//! Application configuration constants.
//!
//! Every timing value of the mockup is a design constant, not a runtime
//! setting. They are grouped here so the state machines, the host loop and
//! the tests all read the same numbers.
//!
//! Layout values are pre-computed at compile time in the same way, so the
//! drawing code never recalculates positions per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Screen Dwell Times (milliseconds)
// =============================================================================

/// "Transaction" screen: payment summary.
pub const DWELL_TRANSACTION_MS: u64 = 2500;

/// "Secured" screen: funds locked in escrow.
pub const DWELL_SECURED_MS: u64 = 2000;

/// "Progress" screen: three-step settlement progress.
pub const DWELL_PROGRESS_MS: u64 = 3500;

/// "Complete" screen: payout confirmation.
pub const DWELL_COMPLETE_MS: u64 = 2500;

/// "Verified" screen: live settlement feed.
pub const DWELL_VERIFIED_MS: u64 = 3000;

/// Length of one full cycle through all five screens.
pub const CYCLE_MS: u64 =
    DWELL_TRANSACTION_MS + DWELL_SECURED_MS + DWELL_PROGRESS_MS + DWELL_COMPLETE_MS + DWELL_VERIFIED_MS;

// =============================================================================
// Progress Sub-Stepper
// =============================================================================

/// Number of steps shown on the Progress screen.
pub const PROGRESS_STEPS: u8 = 3;

/// Offset from Progress entry at which each step completes.
/// Index `i` moves the counter from `i` to `i + 1`.
pub const PROGRESS_STEP_OFFSETS_MS: [u64; PROGRESS_STEPS as usize] = [0, 1500, 3000];

// Every step must land inside the screen's dwell
const _: () = assert!(PROGRESS_STEP_OFFSETS_MS[2] < DWELL_PROGRESS_MS);

// =============================================================================
// Settlement Feed
// =============================================================================

/// Maximum records kept in the rolling settlement window.
pub const FEED_WINDOW: usize = 15;

/// Delay between entering Verified and the first generated record.
pub const FEED_FIRST_DELAY_MS: u64 = 1500;

/// Lower bound (inclusive) of the randomized generation interval.
pub const FEED_INTERVAL_MIN_MS: u64 = 2000;

/// Upper bound (exclusive) of the randomized generation interval.
pub const FEED_INTERVAL_MAX_MS: u64 = 3500;

const _: () = assert!(FEED_INTERVAL_MIN_MS < FEED_INTERVAL_MAX_MS);

// =============================================================================
// Pointer Tilt
// =============================================================================

/// Maximum phone tilt in degrees at the edge of the bounding box.
pub const TILT_MAX_DEG: f32 = 12.0;

/// Parallax shift in pixels of the phone body at full offset.
pub const PARALLAX_BODY_PX: f32 = 4.0;

/// Parallax shift in pixels of the screen content at full offset.
/// Larger than the body so the content appears to float above it.
pub const PARALLAX_CONTENT_PX: f32 = 7.0;

// =============================================================================
// Phone Mockup Layout
// =============================================================================

/// Phone body width.
pub const PHONE_WIDTH: u32 = 132;

/// Phone body height.
pub const PHONE_HEIGHT: u32 = 224;

/// Phone body left edge (horizontally centered).
pub const PHONE_X: i32 = (SCREEN_WIDTH - PHONE_WIDTH) as i32 / 2;

/// Phone body top edge (vertically centered).
pub const PHONE_Y: i32 = (SCREEN_HEIGHT - PHONE_HEIGHT) as i32 / 2;

/// Bezel thickness between body edge and screen area.
pub const PHONE_BEZEL: u32 = 6;

/// Phone screen area, inside the bezel.
pub const PHONE_SCREEN_X: i32 = PHONE_X + PHONE_BEZEL as i32;
pub const PHONE_SCREEN_Y: i32 = PHONE_Y + PHONE_BEZEL as i32;
pub const PHONE_SCREEN_WIDTH: u32 = PHONE_WIDTH - 2 * PHONE_BEZEL;
pub const PHONE_SCREEN_HEIGHT: u32 = PHONE_HEIGHT - 2 * PHONE_BEZEL;

/// Corner radius of the phone body.
pub const PHONE_CORNER_RADIUS: u32 = 14;

/// Rows of the settlement feed visible on the Verified screen.
/// The window holds more; the rest scrolls off the bottom of the phone.
pub const FEED_VISIBLE_ROWS: usize = 6;

/// Height of one feed row (two text lines).
pub const FEED_ROW_HEIGHT: i32 = 24;

// =============================================================================
// Side Panels
// =============================================================================

/// Width of the panels left and right of the phone.
pub const SIDE_PANEL_WIDTH: u32 = PHONE_X as u32;

/// Left panel (caption, dwell bar) center X.
pub const LEFT_PANEL_CENTER_X: i32 = PHONE_X / 2;

/// Right panel (Next button, key hints) center X.
pub const RIGHT_PANEL_CENTER_X: i32 = PHONE_X + PHONE_WIDTH as i32 + PHONE_X / 2;

/// "Next" button size and position (right panel, vertically centered).
pub const NEXT_BUTTON_WIDTH: u32 = 70;
pub const NEXT_BUTTON_HEIGHT: u32 = 24;
pub const NEXT_BUTTON_X: i32 = RIGHT_PANEL_CENTER_X - (NEXT_BUTTON_WIDTH / 2) as i32;
pub const NEXT_BUTTON_Y: i32 = CENTER_Y - (NEXT_BUTTON_HEIGHT / 2) as i32;

/// Dwell bar (time left on the current screen) in the left panel.
pub const DWELL_BAR_WIDTH: u32 = 70;
pub const DWELL_BAR_HEIGHT: u32 = 4;
pub const DWELL_BAR_X: i32 = LEFT_PANEL_CENTER_X - (DWELL_BAR_WIDTH / 2) as i32;
pub const DWELL_BAR_Y: i32 = CENTER_Y + 24;

// Everything must fit beside the phone
const _: () = assert!(NEXT_BUTTON_WIDTH < SIDE_PANEL_WIDTH);
const _: () = assert!(DWELL_BAR_WIDTH < SIDE_PANEL_WIDTH);
