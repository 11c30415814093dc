//! Animation effects for the mockup.
//!
//! - **Accent fade**: the phone accent color cross-fades when the screen changes
//! - **Tilt smoothing**: the displayed tilt eases toward the pointer offset
//! - **Bob**: the lock icon and live indicator float up and down
//!
//! # Accent Fade
//!
//! Each screen has its own accent color. Instead of switching instantly,
//! the current color is interpolated toward the target a little every frame
//! in RGB565 space, with fixed-point math.
//!
//! # Bob
//!
//! ```text
//! offset = sin(frame * frequency) * amplitude
//! ```
//!
//! Sine comes from `micromath` since this crate is `no_std`.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::pointer::PointerOffset;

// =============================================================================
// Bob Constants
// =============================================================================

/// Maximum vertical bob offset in pixels.
const BOB_AMPLITUDE: f32 = 2.0;

/// Bob oscillation speed. At 50 FPS, 0.12 is roughly one float per second.
const BOB_FREQUENCY: f32 = 0.12;

// =============================================================================
// Color Fade Constants
// =============================================================================

/// Speed of color interpolation (0.0-1.0). 1.0 = instant.
/// At 0.2 a full accent change settles in about 12 frames (~250ms at 50 FPS).
const COLOR_LERP_SPEED: f32 = 0.2;

/// Manhattan distance at which the fade snaps to the target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

// =============================================================================
// Tilt Smoothing Constants
// =============================================================================

/// Fraction of the remaining distance covered each frame.
const TILT_LERP_SPEED: f32 = 0.25;

/// Distance (per axis, normalized units) at which smoothing snaps.
const TILT_SNAP_THRESHOLD: f32 = 0.01;

// =============================================================================
// Bob
// =============================================================================

/// Vertical bob offset for floating icons. Returns 0 when inactive.
#[inline]
pub fn calculate_bob_offset(
    frame: u32,
    active: bool,
) -> i32 {
    if !active {
        return 0;
    }

    let phase = frame as f32 * BOB_FREQUENCY;
    let offset = micromath::F32(phase).sin().0 * BOB_AMPLITUDE;
    offset as i32
}

// =============================================================================
// Accent Fade
// =============================================================================

/// Cross-fade state for the screen accent color.
pub struct AccentFade {
    current: Rgb565,
    target: Rgb565,
    transitioning: bool,
}

impl AccentFade {
    /// Start settled on `color`.
    pub const fn new(color: Rgb565) -> Self {
        Self {
            current: color,
            target: color,
            transitioning: false,
        }
    }

    /// Set the target color. Returns `true` if a new fade started.
    pub fn set_target(
        &mut self,
        target: Rgb565,
    ) -> bool {
        if self.target == target {
            return false;
        }
        self.target = target;
        self.transitioning = true;
        true
    }

    /// Jump straight to `color` with no fade.
    pub const fn snap_to(
        &mut self,
        color: Rgb565,
    ) {
        self.current = color;
        self.target = color;
        self.transitioning = false;
    }

    #[inline]
    pub const fn current(&self) -> Rgb565 { self.current }

    #[inline]
    pub const fn is_transitioning(&self) -> bool { self.transitioning }

    /// Advance the fade by one frame. Returns `true` if the color changed.
    pub fn update(&mut self) -> bool {
        if !self.transitioning {
            return false;
        }
        if self.current == self.target {
            self.transitioning = false;
            return false;
        }

        let next = lerp_rgb565(self.current, self.target, COLOR_LERP_SPEED);
        if colors_close_enough(next, self.target) {
            self.current = self.target;
            self.transitioning = false;
        } else {
            self.current = next;
        }
        true
    }
}

// =============================================================================
// Tilt Smoothing
// =============================================================================

/// Eases the displayed pointer offset toward the tracked one.
#[derive(Clone, Copy, Default, Debug)]
pub struct TiltSmoother {
    current: PointerOffset,
}

impl TiltSmoother {
    pub const fn new() -> Self {
        Self {
            current: PointerOffset::NEUTRAL,
        }
    }

    /// Move one frame toward `target`. Returns `true` if the offset changed.
    pub fn update(
        &mut self,
        target: PointerOffset,
    ) -> bool {
        if self.current == target {
            return false;
        }

        let dx = target.nx - self.current.nx;
        let dy = target.ny - self.current.ny;
        if dx.abs() < TILT_SNAP_THRESHOLD && dy.abs() < TILT_SNAP_THRESHOLD {
            self.current = target;
        } else {
            self.current.nx += dx * TILT_LERP_SPEED;
            self.current.ny += dy * TILT_LERP_SPEED;
        }
        true
    }

    #[inline]
    pub const fn current(&self) -> PointerOffset { self.current }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

fn split_rgb565(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    ((raw >> 11) as i32 & 0x1F, (raw >> 5) as i32 & 0x3F, raw as i32 & 0x1F)
}

/// Linear interpolation between two Rgb565 colors in 8-bit fixed point.
///
/// A channel that still differs always moves by at least 1, so repeated
/// calls reach the target exactly instead of stalling on a truncated step.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (from_r, from_g, from_b) = split_rgb565(from);
    let (to_r, to_g, to_b) = split_rgb565(to);

    let t_fixed = (t * 256.0) as i32;

    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 => delta.signum(),
            s => s,
        }
    };

    let r = (from_r + step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Manhattan distance in RGB565 space within the snap threshold.
fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (a_r, a_g, a_b) = split_rgb565(a);
    let (b_r, b_g, b_b) = split_rgb565(b);
    (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs() <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, ESCROW_AMBER, SETTLE_GREEN, WHITE};

    // -------------------------------------------------------------------------
    // Bob Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_bob_inactive_is_zero() {
        assert_eq!(calculate_bob_offset(0, false), 0);
        assert_eq!(calculate_bob_offset(37, false), 0);
    }

    #[test]
    fn test_bob_bounded() {
        assert_eq!(calculate_bob_offset(0, true), 0, "sin(0) = 0");
        for frame in 0..1000 {
            let offset = calculate_bob_offset(frame, true);
            assert!(
                offset.abs() <= BOB_AMPLITUDE as i32,
                "Frame {frame}: offset {offset} exceeds amplitude {BOB_AMPLITUDE}"
            );
        }
    }

    #[test]
    fn test_bob_moves() {
        let distinct = (0..60).map(|f| calculate_bob_offset(f, true)).any(|o| o != 0);
        assert!(distinct, "Bob should leave zero within a second");
    }

    // -------------------------------------------------------------------------
    // Color Interpolation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(SETTLE_GREEN, SETTLE_GREEN, 0.5), SETTLE_GREEN);
        assert_eq!(lerp_rgb565(BLACK, WHITE, 0.0), BLACK, "t=0 keeps 'from'");
        assert_eq!(lerp_rgb565(BLACK, WHITE, 1.0), WHITE, "t=1 reaches 'to'");
        assert_eq!(lerp_rgb565(WHITE, BLACK, 1.0), BLACK, "t=1 reaches 'to' going down");
    }

    #[test]
    fn test_lerp_rgb565_minimum_step() {
        let from = Rgb565::new(10, 20, 10);
        let to = Rgb565::new(11, 19, 10);
        let next = lerp_rgb565(from, to, 0.1);
        assert_eq!(next, to, "Single-unit deltas still move");
    }

    #[test]
    fn test_colors_close_enough() {
        assert!(colors_close_enough(WHITE, WHITE));
        assert!(!colors_close_enough(BLACK, WHITE));
        assert!(colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(15, 33, 15)));
        assert!(!colors_close_enough(Rgb565::new(15, 32, 15), Rgb565::new(16, 33, 16)));
    }

    // -------------------------------------------------------------------------
    // AccentFade Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_accent_fade_set_target() {
        let mut fade = AccentFade::new(ESCROW_AMBER);
        assert!(!fade.set_target(ESCROW_AMBER), "Same target does not start a fade");
        assert!(fade.set_target(SETTLE_GREEN));
        assert!(fade.is_transitioning());
        assert_eq!(fade.current(), ESCROW_AMBER, "Color changes only on update");
    }

    #[test]
    fn test_accent_fade_converges() {
        let mut fade = AccentFade::new(BLACK);
        fade.set_target(WHITE);

        let mut frames = 0;
        while fade.update() {
            frames += 1;
            assert!(frames < 150, "Fade must converge");
        }
        assert_eq!(fade.current(), WHITE, "Fade lands exactly on the target");
        assert!(!fade.is_transitioning());
    }

    #[test]
    fn test_accent_fade_retarget_midway() {
        let mut fade = AccentFade::new(BLACK);
        fade.set_target(WHITE);
        for _ in 0..3 {
            fade.update();
        }
        fade.set_target(ESCROW_AMBER);
        while fade.update() {}
        assert_eq!(fade.current(), ESCROW_AMBER);
    }

    #[test]
    fn test_accent_fade_snap() {
        let mut fade = AccentFade::new(BLACK);
        fade.set_target(WHITE);
        fade.snap_to(SETTLE_GREEN);
        assert_eq!(fade.current(), SETTLE_GREEN);
        assert!(!fade.update(), "Snapped fade has nothing to do");
    }

    // -------------------------------------------------------------------------
    // TiltSmoother Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tilt_smoother_converges_and_returns() {
        let mut smoother = TiltSmoother::new();
        let target = PointerOffset { nx: 1.0, ny: -0.5 };

        assert!(smoother.update(target));
        let first = smoother.current();
        assert!(first.nx > 0.0 && first.nx < 1.0, "Moves part of the way: {first:?}");

        let mut frames = 0;
        while smoother.update(target) {
            frames += 1;
            assert!(frames < 100, "Smoothing must converge");
        }
        assert_eq!(smoother.current(), target);

        while smoother.update(PointerOffset::NEUTRAL) {}
        assert!(smoother.current().is_neutral(), "Returns to neutral after leave");
    }
}
