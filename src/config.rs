// In: src/config.rs

//! The single source of truth for eightbtenb configuration.
//!
//! `LineCodeConfig` is created once at the application boundary (e.g. from a
//! JSON document or Python keyword arguments) and handed down read-only. The
//! core kernels take no configuration at all; everything here governs the
//! binding layer and logging.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::LineCodeError;

//==================================================================================
// I. Section Structs & Enums
//==================================================================================

/// How strictly the binding layer validates a decode request before handing it
/// to the core.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecodeConfig {
    /// If true, input bytes beyond the last byte holding requested bits are an
    /// error (`UnusedBytes`) instead of being ignored.
    #[serde(default)]
    pub reject_unused_bytes: bool,
}

/// Verbosity of the crate's `log` output, mirrored onto `log::LevelFilter`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
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
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Where and how verbosely to log, consumed by `observability::init_logging`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Append log lines to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

//==================================================================================
// II. The Unified LineCodeConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LineCodeConfig {
    #[serde(default)]
    pub decode: DecodeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LineCodeConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LineCodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = LineCodeConfig::from_json("{}").unwrap();
        assert_eq!(config, LineCodeConfig::default());
        assert!(!config.decode.reject_unused_bytes);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.logging.log_file.is_none());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = LineCodeConfig::from_json(
            r#"{"decode": {"reject_unused_bytes": true}, "logging": {"level": "debug"}}"#,
        )
        .unwrap();
        assert!(config.decode.reject_unused_bytes);
        assert_eq!(LevelFilter::from(config.logging.level), LevelFilter::Debug);
    }

    #[test]
    fn test_log_file_is_read() {
        let config =
            LineCodeConfig::from_json(r#"{"logging": {"log_file": "/tmp/eightbtenb.log"}}"#)
                .unwrap();
        assert_eq!(config.logging.log_file.as_deref(), Some("/tmp/eightbtenb.log"));
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_level_is_an_error() {
        let result = LineCodeConfig::from_json(r#"{"logging": {"level": "loud"}}"#);
        assert!(matches!(result, Err(LineCodeError::SerdeJson(_))));
    }
}
