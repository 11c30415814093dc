// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u128->u64 casts for pixel and clock math
#![allow(clippy::cast_precision_loss)] // u32/u64->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know sign is positive
#![allow(clippy::struct_excessive_bools)] // RenderState uses bools appropriately

//! Locked & Secured: an animated phone mockup of a transaction lifecycle.
//!
//! A phone on the desk walks through five screens on fixed timers:
//!
//! ```text
//! TRANSACTION ─2.5s─► SECURED ─2.0s─► PROGRESS ─3.5s─► COMPLETE ─2.5s─► VERIFIED ─3.0s─┐
//!      ▲                                 3 steps                         live feed     │
//!      └───────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine lives in `mockup-common` (`no_std`, clock passed in). This
//! binary adds the presentation and two front ends:
//!
//! - **Window** (feature `window`): SDL2 window, pointer tilt, Next button,
//!   debug page. See [`window`].
//! - **Headless** (default): simulated clock, one PNG per screen visit. See
//!   [`capture`].
//!
//! # Layout
//!
//! ```text
//! ┌────────────┬──────────────────┬────────────┐
//! │ LOCKED &   │ ┌──────────────┐ │     50 FPS │
//! │ SECURED    │ │ 9:41   ▬   ▭ │ │            │
//! │            │ │              │ │            │
//! │ SECURED    │ │   screen     │ │ [ NEXT > ] │
//! │ 2/5        │ │   content    │ │            │
//! │ ▬▬▬▬▬──    │ │              │ │ N/SPC next │
//! │            │ │   • ▬ • • •  │ │ Y debug    │
//! │            │ └──────────────┘ │ ESC quit   │
//! └────────────┴──────────────────┴────────────┘
//!     94px            132px            94px
//! ```
//!
//! # Logging
//!
//! `RUST_LOG` selects the level (default `info`): screen changes at `info`,
//! timer and feed detail at `debug`.

mod app;
mod capture;
mod cli;
mod error;
mod profiling;
mod screens;
mod timing;
mod widgets;
#[cfg(feature = "window")]
mod window;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut app = App::new(SmallRng::seed_from_u64(seed), seed);

    #[cfg(feature = "window")]
    if !cli.headless {
        window::run_window(&mut app, cli.scale);
        return Ok(());
    }
    #[cfg(not(feature = "window"))]
    if !cli.headless {
        log::debug!("built without the window feature, running headless");
    }

    let written = capture::run_capture(&mut app, &cli.out_dir, cli.duration_ms, cli.scale)
        .context("headless capture failed")?;
    for path in &written {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
