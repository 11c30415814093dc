//! On-screen debug log.
//!
//! A ring buffer of short lines shown in the terminal panel of the debug
//! page. Lines are stamped with the mockup clock so screen changes and feed
//! insertions can be read back in order. Time-based frame metrics live in
//! the host crate, since they need `std::time`.

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of the last [`LOG_BUFFER_SIZE`] lines.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line, dropping the oldest when full. Long lines are truncated.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        push_truncated(&mut line, msg);
        self.push_line(line);
    }

    /// Push a line prefixed with the clock, e.g. `12.5s SECURED`.
    pub fn push_at(
        &mut self,
        now_ms: u64,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        push_seconds(&mut line, now_ms);
        line.push(' ').ok();
        push_truncated(&mut line, msg);
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Append as much of `msg` as fits, always leaving one byte spare.
fn push_truncated<const N: usize>(
    s: &mut String<N>,
    msg: &str,
) {
    for c in msg.chars() {
        if s.len() + c.len_utf8() >= N {
            break;
        }
        s.push(c).ok();
    }
}

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    val: u32,
) {
    push_u64(s, u64::from(val));
}

/// Push a u64 value to a heapless string.
pub fn push_u64<const N: usize>(
    s: &mut String<N>,
    mut val: u64,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 20];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

/// Push milliseconds as seconds with one decimal, e.g. `12.5s`.
pub fn push_seconds<const N: usize>(
    s: &mut String<N>,
    ms: u64,
) {
    push_u64(s, ms / 1000);
    s.push('.').ok();
    s.push((b'0' + ((ms % 1000) / 100) as u8) as char).ok();
    s.push('s').ok();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push("mounted");
        log.push("next");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), ["mounted", "next"]);
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            push_u32(&mut msg, i as u32);
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        log.push("new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE, "Full buffer stays full");
        assert_eq!(log.iter().next(), Some("1"), "Oldest line dropped");
        assert_eq!(log.iter().last(), Some("new"));
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push("this line is much longer than the terminal panel could ever show on screen");
        let stored = log.iter().next().unwrap_or_default();
        assert_eq!(stored.len(), LOG_LINE_LENGTH - 1);
    }

    #[test]
    fn test_debug_log_truncation_respects_char_boundaries() {
        let mut log = DebugLog::new();
        let arrows = "→".repeat(30);
        log.push(&arrows);
        let stored = log.iter().next().unwrap_or_default();
        assert!(stored.len() < LOG_LINE_LENGTH);
        assert!(stored.chars().all(|c| c == '→'));
    }

    #[test]
    fn test_push_at_stamps_seconds() {
        let mut log = DebugLog::new();
        log.push_at(12_540, "SECURED");
        log.push_at(0, "mount");
        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, ["12.5s SECURED", "0.0s mount"]);
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 9999);
        assert_eq!(s.as_str(), "9999");
    }

    #[test]
    fn test_push_u64_max() {
        let mut s: String<24> = String::new();
        push_u64(&mut s, u64::MAX);
        assert_eq!(s.as_str(), "18446744073709551615");
    }

    #[test]
    fn test_push_seconds() {
        let mut s: String<16> = String::new();
        push_seconds(&mut s, 13_500);
        assert_eq!(s.as_str(), "13.5s");
    }
}
