//! Render state tracking for display updates.
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Backdrop, caption | Once / after clear | Draw-once tracking |
//! | Phone and screen content | Every frame | Always redraw (tilt, fades, bob) |
//! | FPS counter | On rounded FPS change | Conditional redraw |
//! | Whole display | On screen change / page switch | Full clear |
//!
//! # Screen Change Cleanup
//!
//! Each screen lays out different content, so the display is cleared in the
//! frame the sequencer reports a new screen. The backdrop is then marked for
//! redraw since the clear removed it.

use crate::pages::Page;
use crate::screen::ScreenState;

/// Tracks what needs drawing this frame.
pub struct RenderState {
    /// Screen drawn last frame (`None` before the first frame).
    prev_screen: Option<ScreenState>,

    /// Page drawn last frame.
    prev_page: Page,

    /// Screen changed this frame.
    screen_just_changed: bool,

    /// Page switched this frame.
    page_just_changed: bool,

    /// Whether the backdrop has been drawn since the last clear.
    backdrop_drawn: bool,

    /// Previous FPS value, rounded as displayed.
    prev_fps_rounded: u32,

    /// Whether this is the first frame.
    first_frame: bool,

    /// Whether the display was cleared this frame.
    display_cleared: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            prev_screen: None,
            prev_page: Page::Mockup,
            screen_just_changed: false,
            page_just_changed: false,
            backdrop_drawn: false,
            prev_fps_rounded: 0,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Record the screen about to be drawn. Returns `true` if it changed.
    pub fn update_screen(
        &mut self,
        screen: ScreenState,
    ) -> bool {
        let changed = self.prev_screen.is_some_and(|prev| prev != screen);
        self.prev_screen = Some(screen);
        if changed {
            self.screen_just_changed = true;
        }
        changed
    }

    /// Record the page about to be drawn. Returns `true` if it switched.
    pub fn update_page(
        &mut self,
        page: Page,
    ) -> bool {
        let changed = page != self.prev_page;
        self.prev_page = page;
        if changed {
            self.page_just_changed = true;
        }
        changed
    }

    /// Whether the display must be fully cleared before drawing.
    #[inline]
    pub const fn needs_clear(&self) -> bool { self.first_frame || self.screen_just_changed || self.page_just_changed }

    #[inline]
    pub const fn screen_just_changed(&self) -> bool { self.screen_just_changed }

    #[inline]
    pub const fn page_just_changed(&self) -> bool { self.page_just_changed }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Check if the backdrop needs drawing.
    #[inline]
    pub const fn need_backdrop(&self) -> bool { !self.backdrop_drawn || self.display_cleared }

    #[inline]
    pub const fn mark_backdrop_drawn(&mut self) { self.backdrop_drawn = true; }

    /// Check if the FPS counter needs redrawing.
    pub fn check_fps_dirty(
        &mut self,
        fps: f32,
    ) -> bool {
        let fps_rounded = (fps.max(0.0) + 0.5) as u32;
        let dirty = self.first_frame || self.display_cleared || fps_rounded != self.prev_fps_rounded;
        self.prev_fps_rounded = fps_rounded;
        dirty
    }

    /// Mark that the display was cleared this frame.
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.backdrop_drawn = false;
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.screen_just_changed = false;
        self.page_just_changed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_needs_everything() {
        let state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.needs_clear(), "First frame clears the display");
        assert!(state.need_backdrop());
    }

    #[test]
    fn test_first_screen_is_not_a_change() {
        let mut state = RenderState::new();
        assert!(!state.update_screen(ScreenState::Transaction), "No previous screen to change from");
        state.end_frame();
        assert!(!state.needs_clear());
    }

    #[test]
    fn test_screen_change_requests_clear_for_one_frame() {
        let mut state = RenderState::new();
        state.update_screen(ScreenState::Transaction);
        state.end_frame();

        assert!(state.update_screen(ScreenState::Secured));
        assert!(state.screen_just_changed());
        assert!(state.needs_clear());

        state.mark_display_cleared();
        assert!(state.need_backdrop(), "Backdrop redrawn after clear");
        state.mark_backdrop_drawn();
        state.end_frame();

        assert!(!state.update_screen(ScreenState::Secured));
        assert!(!state.needs_clear(), "Clear happens only in the change frame");
        assert!(!state.need_backdrop());
    }

    #[test]
    fn test_page_switch() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(!state.update_page(Page::Mockup));
        assert!(state.update_page(Page::Debug));
        assert!(state.page_just_changed());
        assert!(state.needs_clear());
        state.end_frame();
        assert!(!state.page_just_changed());
    }

    #[test]
    fn test_fps_dirty_uses_rounded_value() {
        let mut state = RenderState::new();
        assert!(state.check_fps_dirty(50.0), "Dirty on first frame");
        state.end_frame();

        assert!(!state.check_fps_dirty(50.4), "50.4 displays as 50");
        assert!(state.check_fps_dirty(50.5), "50.5 displays as 51");
        assert!(!state.check_fps_dirty(51.2));

        state.mark_display_cleared();
        assert!(state.check_fps_dirty(51.0), "Dirty after display clear");
    }
}
