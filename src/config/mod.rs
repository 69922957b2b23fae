//! Configuration management for parkit.
//!
//! This module loads the optional YAML file given with `--config` and merges
//! it with command line flags into the [`Settings`] for a run.

mod settings;

pub use settings::{ColorSetting, Config, GeneralConfig, LogLevel, ParsingConfig, Settings};
