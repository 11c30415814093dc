//! Profiling metrics with time-based measurements.
//!
//! Frame timing statistics plus engine and render counters, shown on the
//! debug page. The `DebugLog` ring buffer is in the common crate since it
//! doesn't need `std::time`.

use std::time::{Duration, Instant};

use heapless::String;
use mockup_common::profiling::push_u32;

/// Frame timing, render counters and engine counters.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Render counters
    pub total_frames: u64,
    pub display_clears: u32,
    pub backdrop_redraws: u32,
    pub accent_fade_frames: u32,

    // Engine counters
    pub timers_fired: u32,
    pub manual_advances: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            display_clears: 0,
            backdrop_redraws: 0,
            accent_fade_frames: 0,
            timers_fired: 0,
            manual_advances: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds (exponential moving average).
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Smallest frame time seen, 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_or_zero_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX { 0 } else { self.frame_time_min_us }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }

    #[inline]
    pub const fn inc_display_clears(&mut self) { self.display_clears += 1; }

    #[inline]
    pub const fn inc_backdrop_redraws(&mut self) { self.backdrop_redraws += 1; }

    #[inline]
    pub const fn inc_accent_fade_frames(&mut self) { self.accent_fade_frames += 1; }

    #[inline]
    pub const fn inc_manual_advances(&mut self) { self.manual_advances += 1; }

    #[inline]
    pub const fn add_timers_fired(
        &mut self,
        n: u32,
    ) {
        self.timers_fired += n;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format whole seconds as HH:MM:SS.
fn format_hms(total_secs: u64) -> String<12> {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part as u32);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_frame_tracks_min_max_avg() {
        let mut metrics = ProfilingMetrics::new();
        assert_eq!(metrics.frame_time_min_or_zero_us(), 0, "No frames yet");

        metrics.record_frame(Duration::from_millis(20), Duration::from_millis(5), Duration::from_millis(15));
        assert_eq!(metrics.frame_time_us, 20_000);
        assert_eq!(metrics.render_time_us, 5_000);
        assert_eq!(metrics.frame_time_avg_us(), 20_000, "First frame seeds the average");

        metrics.record_frame(Duration::from_millis(30), Duration::from_millis(30), Duration::ZERO);
        assert_eq!(metrics.frame_time_min_or_zero_us(), 20_000);
        assert_eq!(metrics.frame_time_max_us, 30_000);
        let avg = metrics.frame_time_avg_us();
        assert!((20_990..=21_010).contains(&avg), "EMA moves 10% toward the new sample: {avg}");
        assert_eq!(metrics.total_frames, 2);
    }

    #[test]
    fn test_counters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.inc_display_clears();
        metrics.inc_manual_advances();
        metrics.add_timers_fired(3);
        assert_eq!(metrics.display_clears, 1);
        assert_eq!(metrics.manual_advances, 1);
        assert_eq!(metrics.timers_fired, 3);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0).as_str(), "00:00:00");
        assert_eq!(format_hms(3_725).as_str(), "01:02:05");
        assert_eq!(format_hms(36_000 + 59).as_str(), "10:00:59");
    }
}
