//! Headless capture: run the mockup on a simulated clock and save PNGs.
//!
//! The clock advances by exactly one frame per iteration, so a capture run
//! is deterministic for a given seed and takes no real time. One image is
//! written per screen visit, once the screen has settled, plus the final
//! frame of the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use mockup_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use rand::RngCore;

use crate::app::App;
use crate::error::CaptureError;
use crate::timing::FRAME_MS;

/// Time on a screen before it is captured: fades done, first feed record in.
const CAPTURE_SETTLE_MS: u64 = 1600;

/// Nominal frame rate shown in captures.
const CAPTURE_FPS: f32 = 1000.0 / FRAME_MS as f32;

/// Run the app from mount for `duration_ms` and write captures into `out_dir`.
///
/// Returns the paths written, in order.
pub fn run_capture<R: RngCore>(
    app: &mut App<R>,
    out_dir: &Path,
    duration_ms: u64,
    scale: u32,
) -> Result<Vec<PathBuf>, CaptureError> {
    fs::create_dir_all(out_dir).map_err(|source| CaptureError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let output_settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut written = Vec::new();

    app.mount(0);
    let mut visit = app.sequencer().transitions();
    let mut captured = false;
    let mut now_ms = 0;

    loop {
        let frame_start = Instant::now();
        app.tick(now_ms);
        app.draw(&mut display, now_ms, CAPTURE_FPS);
        let render_time = frame_start.elapsed();
        // Simulated clock: no sleep, the frame ends when rendering does
        app.record_frame(render_time, render_time, Duration::ZERO);

        let transitions = app.sequencer().transitions();
        if transitions != visit {
            visit = transitions;
            captured = false;
        }

        if !captured && app.sequencer().screen_elapsed(now_ms) >= CAPTURE_SETTLE_MS {
            let screen = app.sequencer().screen();
            let path = out_dir.join(capture_name(written.len(), screen.slug(), now_ms));
            save_png(&display, &output_settings, &path)?;
            written.push(path);
            captured = true;
        }

        if now_ms >= duration_ms {
            break;
        }
        now_ms = (now_ms + FRAME_MS).min(duration_ms);
    }

    let final_name = capture_name(written.len(), "final", now_ms);
    let path = out_dir.join(final_name);
    save_png(&display, &output_settings, &path)?;
    written.push(path);

    log::info!(
        "captured {} frames over {duration_ms}ms ({} transitions)",
        written.len(),
        app.sequencer().transitions()
    );
    app.unmount();
    Ok(written)
}

/// `03-progress-6100ms.png`
fn capture_name(
    index: usize,
    label: &str,
    now_ms: u64,
) -> String {
    format!("{index:02}-{label}-{now_ms}ms.png")
}

fn save_png(
    display: &SimulatorDisplay<Rgb565>,
    settings: &OutputSettings,
    path: &Path,
) -> Result<(), CaptureError> {
    display
        .to_rgb_output_image(settings)
        .save_png(path)
        .map_err(|source| CaptureError::SavePng {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
    log::debug!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockup_common::ScreenState;
    use mockup_common::config::CYCLE_MS;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_capture_name() {
        assert_eq!(capture_name(3, "progress", 6100), "03-progress-6100ms.png");
        assert_eq!(capture_name(12, "final", 13_500), "12-final-13500ms.png");
    }

    #[test]
    fn test_full_cycle_writes_one_png_per_screen() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(SmallRng::seed_from_u64(42), 42);

        let written = run_capture(&mut app, dir.path(), CYCLE_MS, 1).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        let expected: Vec<String> = ScreenState::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let entered = ScreenState::ALL[..i].iter().map(|s| s.dwell_ms()).sum::<u64>();
                capture_name(i, s.slug(), entered + CAPTURE_SETTLE_MS)
            })
            .chain([capture_name(5, "final", CYCLE_MS)])
            .collect();
        assert_eq!(names, expected);
        assert!(written.iter().all(|p| p.is_file()), "Every capture exists on disk");
        assert!(!app.sequencer().is_mounted(), "Capture unmounts when done");
    }

    #[test]
    fn test_short_run_writes_final_frame_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(SmallRng::seed_from_u64(1), 1);

        let written = run_capture(&mut app, dir.path(), 500, 1).unwrap();
        assert_eq!(written, vec![dir.path().join("00-final-500ms.png")]);
    }

    #[test]
    fn test_creates_missing_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut app = App::new(SmallRng::seed_from_u64(1), 1);

        let written = run_capture(&mut app, &nested, 500, 1).unwrap();
        assert!(nested.is_dir(), "Nested output directory is created");
        assert!(written[0].is_file());
    }

    #[test]
    fn test_create_dir_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let mut app = App::new(SmallRng::seed_from_u64(1), 1);

        let err = run_capture(&mut app, &blocker.join("sub"), 500, 1).unwrap_err();
        assert!(matches!(err, CaptureError::CreateDir { .. }), "Got {err:?}");
    }
}
