//! Timing constants for the host loop.
//!
//! These use `std::time::Duration`, which is not available in `no_std`, so
//! they live here rather than in the common crate. The engine itself only
//! ever sees milliseconds.

use std::time::Duration;

/// Target frame time (~50 FPS). The window loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frame time as engine milliseconds, for the simulated clock of headless capture.
pub const FRAME_MS: u64 = FRAME_TIME.as_millis() as u64;

/// How often the FPS counter is recomputed.
#[cfg(feature = "window")]
pub const FPS_WINDOW: Duration = Duration::from_secs(1);
