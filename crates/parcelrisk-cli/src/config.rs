//! Runtime configuration for parcelrisk
//!
//! Built from defaults and overridden by command-line flags. Nothing is
//! read from or written to disk.

use crate::cli::Cli;
use parcelrisk_types::{ColorMode, LabelMatching, OutputFormat};
use serde::Serialize;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Output format (table, json, csv)
    pub output_format: OutputFormat,

    /// When to emit ANSI colors
    pub color: ColorMode,

    /// How weather and truck labels are matched
    pub label_matching: LabelMatching,

    /// Enable debug logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            color: ColorMode::Auto,
            label_matching: LabelMatching::Exact,
            verbose: false,
        }
    }
}

impl Config {
    /// Default config with CLI overrides applied
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config::default();

        if let Some(format) = cli.format {
            config.output_format = format;
        }
        if let Some(color) = cli.color {
            config.color = color;
        }
        if cli.normalize_labels {
            config.label_matching = LabelMatching::Normalized;
        }
        config.verbose = cli.verbose;

        config
    }

    /// Prompts go to stderr when stdout carries machine-readable output
    pub fn prompts_on_stderr(&self) -> bool {
        self.output_format != OutputFormat::Table
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Parcel Risk Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Color:          {}", self.color)?;
        writeln!(f, "Label matching: {}", self.label_matching)?;
        writeln!(f, "Verbose:        {}", self.verbose)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["parcelrisk"]);
        assert_eq!(Config::from_cli(&cli), Config::default());
        assert!(!Config::default().prompts_on_stderr());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "parcelrisk",
            "--format",
            "json",
            "--color",
            "never",
            "--normalize-labels",
            "-v",
        ]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.label_matching, LabelMatching::Normalized);
        assert!(config.verbose);
        assert!(config.prompts_on_stderr());
    }

    #[test]
    fn test_display_lists_settings() {
        let text = Config::default().to_string();
        assert!(text.contains("Output format:  table"));
        assert!(text.contains("Color:          auto"));
        assert!(text.contains("Label matching: exact"));
    }
}
