//! Interactive SDL2 window (cargo feature `window`).
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Mouse over the phone | Tilt and parallax (released when the cursor leaves) |
//! | Left click on "NEXT >", `N`, `Space` | Next screen |
//! | `Y` | Switch between Mockup and Debug page |
//! | `Escape`, window close | Unmount and exit |
//!
//! Key repeat is ignored to prevent advance spam when holding keys.
//!
//! The engine clock is wall time since the window opened, in milliseconds.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use mockup_common::colors::BACKDROP;
use mockup_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::RngCore;

use crate::app::App;
use crate::timing::{FPS_WINDOW, FRAME_TIME};

/// Open the window and run the frame loop until the user quits.
pub fn run_window<R: RngCore>(
    app: &mut App<R>,
    scale: u32,
) {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("Locked & Secured", &output_settings);

    display.clear(BACKDROP).ok();
    window.update(&display);

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    // FPS counter state
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    app.mount(now_ms());

    'frames: loop {
        let frame_start = Instant::now();

        app.tick(now_ms());

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'frames,
                SimulatorEvent::MouseMove { point } => app.pointer_moved(point, now_ms()),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    app.click(point, now_ms());
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => break 'frames,
                        Keycode::N | Keycode::Space => app.press_next(now_ms()),
                        Keycode::Y => app.toggle_page(),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        app.pointer_idle(now_ms());

        // FPS, recomputed once per window
        fps_frame_count += 1;
        if last_fps_calc.elapsed() >= FPS_WINDOW {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        app.draw(&mut display, now_ms(), current_fps);
        let render_time = frame_start.elapsed();

        window.update(&display);

        // Sleep to hold the target frame rate
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        app.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }

    app.unmount();
}
