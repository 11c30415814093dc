//! Widget components for the mockup display.
//!
//! - [`primitives`]: Small shapes shared by the screens (check mark, step
//!   marker, padlock, progress bar, pill button, pagination dots)
//! - [`panels`]: Backdrop and the side panels around the phone (caption,
//!   dwell bar, Next button, FPS counter)
//!
//! All widgets draw into any `DrawTarget<Color = Rgb565>`, so the same code
//! renders into the window, into headless captures, and into clipped views
//! of the phone screen.

mod panels;
mod primitives;

pub use panels::{draw_backdrop, draw_dwell_bar, draw_fps, draw_next_button, hit_next_button};
pub use primitives::{
    draw_check,
    draw_lock,
    draw_pagination_dots,
    draw_pill_button,
    draw_progress_bar,
    draw_step_marker,
};
