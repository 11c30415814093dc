//! Common types and engine for the Locked & Secured transaction mockup.
//!
//! This crate contains the platform-agnostic logic shared by the desktop
//! window and the headless capture runner:
//!
//! - [`screen`]: The five lifecycle screens and their fixed dwell times
//! - [`timer`]: Owned, cancellable one-shot deadlines on a millisecond clock
//! - [`stepper`]: Three-step progress counter nested inside the Progress screen
//! - [`feed`]: Synthetic settlement records in a rolling window of 15
//! - [`sequencer`]: The cycle itself, owning every timer above
//! - [`pointer`]: Pointer position to normalized tilt/parallax offset
//! - [`animations`]: Accent color fades, tilt smoothing, bob offset
//! - [`colors`], [`styles`], [`config`]: Display constants
//! - [`pages`], [`render`]: Page navigation and redraw tracking
//! - [`profiling`]: Debug log ring buffer (no time dependencies)
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time is always passed in by the
//! caller as milliseconds, so nothing here depends on `std::time`.

// Use no_std only when NOT testing (tests need std for the test harness and proptest)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod feed;
pub mod pages;
pub mod pointer;
pub mod profiling;
pub mod render;
pub mod screen;
pub mod sequencer;
pub mod stepper;
pub mod styles;
pub mod timer;

// Re-export commonly used items
pub use feed::{SettlementFeed, SettlementRecord};
pub use pages::Page;
pub use pointer::{PointerOffset, PointerTracker};
pub use screen::ScreenState;
pub use sequencer::Sequencer;
