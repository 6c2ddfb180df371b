//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::models::MAX_PERCENT;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "tipcalc", version = VERSION)]
#[command(about = "Work out the tip on a bill and split it across the table")]
pub struct CliConfig {
    /// Bill total to start with
    #[arg(short, long)]
    pub bill: Option<String>,

    /// Party size to start with (default: 1)
    #[arg(short, long)]
    pub split: Option<String>,

    /// Tip percentage to start with (default: 15)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_PERCENT as i64))]
    pub percent: Option<u8>,

    /// Settings file (default: ./tipcalc.toml, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print one result and exit instead of opening the calculator screen
    #[arg(long)]
    pub once: bool,

    /// With --once, print the result as JSON
    #[arg(long, requires = "once")]
    pub json: bool,

    /// Log file for the calculator screen
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Starting values for the screen after settings and flags are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartValues {
    pub percent: u8,
    pub split: String,
    pub bill: String,
}

impl CliConfig {
    /// Merge flags over settings; flags win
    pub fn start_values(&self, settings: &Settings) -> StartValues {
        StartValues {
            percent: self.percent.unwrap_or(settings.default_percent),
            split: self
                .split
                .clone()
                .unwrap_or_else(|| settings.default_split.clone()),
            bill: self.bill.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, clap::Error> {
        CliConfig::try_parse_from(std::iter::once("tipcalc").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_no_args() {
        let config = parse(&[]).unwrap();
        assert!(config.bill.is_none());
        assert!(config.percent.is_none());
        assert!(!config.once);
    }

    #[test]
    fn test_parse_full() {
        let config = parse(&["--bill", "50.00", "-s", "4", "-p", "20", "--once", "--json"]).unwrap();
        assert_eq!(config.bill.as_deref(), Some("50.00"));
        assert_eq!(config.split.as_deref(), Some("4"));
        assert_eq!(config.percent, Some(20));
        assert!(config.once);
        assert!(config.json);
    }

    #[test]
    fn test_parse_percent_above_slider_max() {
        assert!(parse(&["--percent", "81"]).is_err());
        assert!(parse(&["--percent", "80"]).is_ok());
    }

    #[test]
    fn test_parse_json_requires_once() {
        assert!(parse(&["--json"]).is_err());
    }

    #[test]
    fn test_parse_keeps_bad_bill_text() {
        // Validation happens at calculate time, not at parse time
        let config = parse(&["--bill", "abc"]).unwrap();
        assert_eq!(config.bill.as_deref(), Some("abc"));
    }

    #[test]
    fn test_start_values_flags_override_settings() {
        let settings = Settings {
            default_percent: 18,
            default_split: "2".to_string(),
        };
        let config = parse(&["-p", "25"]).unwrap();
        let start = config.start_values(&settings);
        assert_eq!(start.percent, 25);
        assert_eq!(start.split, "2");
        assert_eq!(start.bill, "");
    }

    #[test]
    fn test_start_values_defaults() {
        let start = parse(&[]).unwrap().start_values(&Settings::default());
        assert_eq!(
            start,
            StartValues {
                percent: 15,
                split: "1".to_string(),
                bill: String::new(),
            }
        );
    }
}
