//! Configuration management for the layout checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file with defaults
//!
//! Command-line flags win over the config file, which wins over built-in defaults.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::condition::Units;

/// How the verdict is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One failure message per line
    #[default]
    Text,
    /// Serialized verdict with element snapshots
    Json,
}

/// Command-line arguments for the layout checker
#[derive(Debug, Parser)]
#[command(name = "layout-check")]
#[command(about = "Check element geometry described in a scenario file")]
#[command(version)]
pub struct Args {
    /// Scenario file (TOML, or JSON with a .json extension)
    pub scenario: PathBuf,

    /// Units for plain integer arguments such as paddings and offset bounds
    #[arg(long, value_enum, help = "Metric units (px, percent)")]
    pub units: Option<Units>,

    /// Output format for the verdict
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Log level for the checker
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    /// Config file overriding the default location
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,
}

/// Defaults read from the config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ConfigFile {
    pub units: Option<Units>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Parse a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Scenario to run
    pub scenario: PathBuf,
    /// Units used when the scenario does not name its own
    pub units: Option<Units>,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            // An explicitly named file must exist
            Some(path) => ConfigFile::load(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => ConfigFile::load(&path)?,
                _ => ConfigFile::default(),
            },
        };

        Ok(Config {
            scenario: args.scenario,
            units: args.units.or(file.units),
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// `layout-check/config.toml` under the user config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layout-check").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["layout-check", "page.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_cli_flags() {
        let config = Config::from_args(args(&[
            "--units",
            "percent",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(config.scenario, PathBuf::from("page.toml"));
        assert_eq!(config.units, Some(Units::Percent));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "units = \"percent\"\nformat = \"json\"\nlog_level = \"warn\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = Config::from_args(args(&["--config", &path])).unwrap();
        assert_eq!(config.units, Some(Units::Percent));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");

        let config = Config::from_args(args(&["--config", &path, "--format", "text"])).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = Config::from_args(args(&["--config", "/nonexistent/layout-check.toml"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_units_accept_pixels_alias() {
        assert_eq!(args(&["--units", "pixels"]).units, Some(Units::Px));
    }
}
