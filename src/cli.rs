//! Command-line options.

use std::path::PathBuf;

use clap::Parser;

use crate::timing::FRAME_MS;

/// Locked & Secured transaction lifecycle mockup.
///
/// Without the `window` feature the mockup runs headless on a simulated
/// clock and writes one PNG per screen visit.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Seed for the settlement feed generator. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pixel scale of the window and of captured PNGs.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Run without a window even when the `window` feature is enabled.
    #[arg(long)]
    pub headless: bool,

    /// Directory for headless captures.
    #[arg(long, default_value = "captures")]
    pub out_dir: PathBuf,

    /// Simulated run length for headless capture, in milliseconds.
    #[arg(long, default_value_t = mockup_common::config::CYCLE_MS, value_parser = parse_duration_ms)]
    pub duration_ms: u64,
}

/// A run must cover at least one frame.
fn parse_duration_ms(s: &str) -> Result<u64, String> {
    let ms: u64 = s.parse().map_err(|e| format!("{e}"))?;
    if ms < FRAME_MS {
        return Err(format!("must be at least one frame ({FRAME_MS}ms)"));
    }
    Ok(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mockup"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.scale, 2);
        assert!(!cli.headless);
        assert_eq!(cli.out_dir, PathBuf::from("captures"));
        assert_eq!(cli.duration_ms, 13_500, "One full cycle by default");
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "mockup",
            "--seed",
            "42",
            "--scale",
            "3",
            "--headless",
            "--out-dir",
            "shots",
            "--duration-ms",
            "5000",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.scale, 3);
        assert!(cli.headless);
        assert_eq!(cli.out_dir, PathBuf::from("shots"));
        assert_eq!(cli.duration_ms, 5000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["mockup", "--scale", "0"]).is_err(), "Scale 0");
        assert!(Cli::try_parse_from(["mockup", "--scale", "9"]).is_err(), "Scale above 8");
        assert!(Cli::try_parse_from(["mockup", "--duration-ms", "5"]).is_err(), "Shorter than a frame");
        assert!(Cli::try_parse_from(["mockup", "--seed", "abc"]).is_err(), "Non-numeric seed");
    }
}
