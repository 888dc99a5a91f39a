//! Configuration and CLI argument handling

use std::time::Duration;
use clap::{Parser, ValueEnum};

use crate::render::Layout;

/// How rendered frames are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three text lines per changed frame
    Text,
    /// One JSON document per changed frame
    Json,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "cooldown-overlay")]
#[command(about = "Ability cooldown overlay armed by select/confirm key gestures")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Milliseconds between rendered frames
    #[arg(long, default_value = "16", value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub frame_interval_ms: u64,

    /// Frame output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Horizontal position of the timer rows
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    pub origin_x: i32,

    /// Vertical position of the first timer row
    #[arg(long, default_value = "70", allow_negative_numbers = true)]
    pub origin_y: i32,

    /// Vertical distance between timer rows
    #[arg(long, default_value = "80")]
    pub row_spacing: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Render cadence
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Screen positions of the timer rows
    pub fn layout(&self) -> Layout {
        Layout::stacked(self.origin_x, self.origin_y, self.row_spacing)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Tracing filter directive for this crate
    pub fn log_filter(&self) -> String {
        format!("cooldown_overlay={}", self.log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::Position, state::Ability};

    #[test]
    fn defaults_match_overlay_geometry() {
        let config = Config::try_parse_from(["cooldown-overlay"]).unwrap();

        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.layout().position(Ability::Tss), Position { x: 100, y: 230 });
        assert_eq!(config.log_filter(), "cooldown_overlay=info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "cooldown-overlay",
            "--format",
            "json",
            "--origin-x",
            "10",
            "--row-spacing",
            "20",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.layout().position(Ability::NightParade), Position { x: 10, y: 90 });
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn cadence_below_one_hertz_is_rejected() {
        assert!(Config::try_parse_from(["cooldown-overlay", "--frame-interval-ms", "0"]).is_err());
        assert!(Config::try_parse_from(["cooldown-overlay", "--frame-interval-ms", "1001"]).is_err());
    }
}
