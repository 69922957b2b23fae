//! Configuration settings for parkit.
//!
//! Settings are only loaded from a file named with `--config`.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::cli::args::{Cli, OutputFormat};
use crate::command::NumberPolicy;
use crate::error::ParkitError;
use crate::lot::Tariff;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Charges applied when a vehicle leaves.
    pub billing: Tariff,
    /// Command parsing settings.
    pub parsing: ParsingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log level used when no `-v` flag is given.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Diagnostic log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::OFF,
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Command parsing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParsingConfig {
    /// Reject non-integer capacity and hours instead of reading them as zero.
    pub strict_numbers: bool,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output_format(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

/// Effective settings for one run: the config file with command line
/// overrides applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub color: ColorSetting,
    pub log_level: LogLevel,
    pub tariff: Tariff,
    pub numbers: NumberPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().settings(None, false, 0)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Unlike an implicit config location, an explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ParkitError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ParkitError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        Self::from_yaml(&contents).map_err(|e| {
            ParkitError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Parse configuration from YAML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Load the file named by `--config`, or defaults when none was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or parsed.
    pub fn for_cli(cli: &Cli) -> Result<Self, ParkitError> {
        cli.config
            .as_deref()
            .map_or_else(|| Ok(Self::default()), Self::load_from_path)
    }

    /// Resolve run settings, letting command line flags win.
    ///
    /// `strict` can only tighten number handling; `verbose` counts `-v` flags.
    #[must_use]
    pub fn settings(&self, output: Option<OutputFormat>, strict: bool, verbose: u8) -> Settings {
        let log_level = match verbose {
            0 => self.general.log_level,
            1 => LogLevel::Info.max(self.general.log_level),
            2 => LogLevel::Debug.max(self.general.log_level),
            _ => LogLevel::Trace,
        };
        let numbers = if strict || self.parsing.strict_numbers {
            NumberPolicy::Strict
        } else {
            NumberPolicy::Lenient
        };

        Settings {
            format: output.unwrap_or(self.general.output),
            color: self.general.color,
            log_level,
            tariff: self.billing,
            numbers,
        }
    }
}
