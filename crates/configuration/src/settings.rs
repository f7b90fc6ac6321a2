use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub logging: Logging,
}

/// Contains parameters for how figures are rendered to the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Display {
    /// strftime pattern used for the labels of the cumulative profit series.
    pub date_format: String,
    /// Decimal places shown for units and percentages.
    pub units_precision: u32,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            units_precision: 2,
        }
    }
}

/// Contains parameters for structured logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// The default verbosity when `RUST_LOG` is not set.
    pub level: LogLevel,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
    /// File name prefix for the rolling log files.
    pub file_prefix: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            directory: None,
            file_prefix: "basic-bettor.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl Config {
    /// Rejects settings that would only fail later, at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = self.display.date_format.trim();
        if format.is_empty() {
            return Err(ConfigError::ValidationError(
                "display.date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidationError(format!(
                "display.date_format '{}' is not a valid strftime pattern",
                format
            )));
        }
        if self.display.units_precision > 10 {
            return Err(ConfigError::ValidationError(
                "display.units_precision must be between 0 and 10".to_string(),
            ));
        }
        if self.logging.file_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
