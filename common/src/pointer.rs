//! Pointer position to tilt/parallax mapping.
//!
//! Pure functions of the latest pointer sample. Nothing here touches the
//! screen sequencer or feed.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

/// Pointer position relative to the phone, each axis in [-1, 1].
///
/// (0, 0) is the center of the bounds and the neutral (no tilt) value.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct PointerOffset {
    pub nx: f32,
    pub ny: f32,
}

impl PointerOffset {
    pub const NEUTRAL: Self = Self { nx: 0.0, ny: 0.0 };

    #[inline]
    pub fn is_neutral(self) -> bool { self.nx == 0.0 && self.ny == 0.0 }

    /// Rotation angles in degrees as (around X, around Y).
    ///
    /// Moving the pointer down tips the top edge away; moving right turns
    /// the right edge away.
    #[inline]
    pub fn tilt_deg(
        self,
        max_deg: f32,
    ) -> (f32, f32) {
        (-self.ny * max_deg, self.nx * max_deg)
    }

    /// Pixel shift for a layer at the given depth (max shift in pixels).
    pub fn parallax_px(
        self,
        depth_px: f32,
    ) -> Point {
        Point::new(round_i32(self.nx * depth_px), round_i32(self.ny * depth_px))
    }
}

fn round_i32(value: f32) -> i32 {
    if value >= 0.0 { (value + 0.5) as i32 } else { (value - 0.5) as i32 }
}

/// Map a pointer position into the normalized offset for `bounds`.
///
/// `nx = ((x - left) / width - 0.5) * 2`, `ny` likewise. Zero-sized bounds
/// give the neutral offset. Points outside the bounds produce values
/// outside [-1, 1]; callers filter them with [`PointerTracker`].
pub fn normalized_offset(
    point: Point,
    bounds: Rectangle,
) -> PointerOffset {
    if bounds.size.width == 0 || bounds.size.height == 0 {
        return PointerOffset::NEUTRAL;
    }

    let rel_x = (point.x - bounds.top_left.x) as f32 / bounds.size.width as f32;
    let rel_y = (point.y - bounds.top_left.y) as f32 / bounds.size.height as f32;

    PointerOffset {
        nx: (rel_x - 0.5) * 2.0,
        ny: (rel_y - 0.5) * 2.0,
    }
}

/// Latest pointer offset, reset when the pointer leaves the phone.
#[derive(Clone, Copy, Default, Debug)]
pub struct PointerTracker {
    offset: PointerOffset,
    inside: bool,
}

impl PointerTracker {
    pub const fn new() -> Self {
        Self {
            offset: PointerOffset::NEUTRAL,
            inside: false,
        }
    }

    /// Handle a pointer move. A move outside `bounds` counts as a leave.
    pub fn on_move(
        &mut self,
        point: Point,
        bounds: Rectangle,
    ) {
        if bounds.contains(point) {
            self.offset = normalized_offset(point, bounds);
            self.inside = true;
        } else {
            self.on_leave();
        }
    }

    /// Reset to the neutral offset.
    pub const fn on_leave(&mut self) {
        self.offset = PointerOffset::NEUTRAL;
        self.inside = false;
    }

    #[inline]
    pub const fn offset(&self) -> PointerOffset { self.offset }

    #[inline]
    pub const fn is_inside(&self) -> bool { self.inside }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn bounds() -> Rectangle { Rectangle::new(Point::new(100, 50), Size::new(200, 100)) }

    fn approx(
        a: f32,
        b: f32,
    ) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_center_is_neutral() {
        let offset = normalized_offset(Point::new(200, 100), bounds());
        assert!(approx(offset.nx, 0.0) && approx(offset.ny, 0.0), "{offset:?}");
    }

    #[test]
    fn test_corners_map_to_unit_square() {
        let top_left = normalized_offset(Point::new(100, 50), bounds());
        assert!(approx(top_left.nx, -1.0) && approx(top_left.ny, -1.0), "{top_left:?}");

        let bottom_right = normalized_offset(Point::new(300, 150), bounds());
        assert!(approx(bottom_right.nx, 1.0) && approx(bottom_right.ny, 1.0), "{bottom_right:?}");
    }

    #[test]
    fn test_quarter_point() {
        // 25% across, 75% down
        let offset = normalized_offset(Point::new(150, 125), bounds());
        assert!(approx(offset.nx, -0.5), "nx = {}", offset.nx);
        assert!(approx(offset.ny, 0.5), "ny = {}", offset.ny);
    }

    #[test]
    fn test_zero_sized_bounds_are_neutral() {
        let empty = Rectangle::new(Point::new(10, 10), Size::zero());
        assert_eq!(normalized_offset(Point::new(10, 10), empty), PointerOffset::NEUTRAL);
    }

    #[test]
    fn test_tracker_move_and_leave() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.offset().is_neutral());

        tracker.on_move(Point::new(300 - 1, 50), bounds());
        assert!(tracker.is_inside());
        assert!(tracker.offset().nx > 0.9);
        assert!(approx(tracker.offset().ny, -1.0));

        tracker.on_leave();
        assert!(!tracker.is_inside());
        assert!(tracker.offset().is_neutral(), "Leave resets to (0, 0)");
    }

    #[test]
    fn test_tracker_move_outside_counts_as_leave() {
        let mut tracker = PointerTracker::new();
        tracker.on_move(Point::new(120, 60), bounds());
        assert!(!tracker.offset().is_neutral());

        tracker.on_move(Point::new(5, 5), bounds());
        assert!(tracker.offset().is_neutral());
        assert!(!tracker.is_inside());
    }

    #[test]
    fn test_tilt_and_parallax() {
        let offset = PointerOffset { nx: 0.5, ny: -1.0 };
        let (rot_x, rot_y) = offset.tilt_deg(12.0);
        assert!(approx(rot_x, 12.0), "rot_x = {rot_x}");
        assert!(approx(rot_y, 6.0), "rot_y = {rot_y}");

        assert_eq!(offset.parallax_px(7.0), Point::new(4, -7));
        assert_eq!(PointerOffset::NEUTRAL.parallax_px(7.0), Point::zero());
    }

    proptest! {
        #[test]
        fn prop_inside_points_stay_in_range(x in 0i32..200, y in 0i32..100) {
            let mut tracker = PointerTracker::new();
            tracker.on_move(Point::new(100 + x, 50 + y), bounds());
            let offset = tracker.offset();
            prop_assert!((-1.0..=1.0).contains(&offset.nx), "nx = {}", offset.nx);
            prop_assert!((-1.0..=1.0).contains(&offset.ny), "ny = {}", offset.ny);

            let shift = offset.parallax_px(7.0);
            prop_assert!(shift.x.abs() <= 7 && shift.y.abs() <= 7);
        }
    }
}
