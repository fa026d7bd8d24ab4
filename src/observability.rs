//! Logging setup for hosts that embed the transcoder.
//!
//! The library itself only talks to the `log` facade. This module installs an
//! `env_logger` backend once per process, for hosts (the Python module, the
//! benchmark harness) that have no logger of their own.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::error::LineCodeError;

/// Set only after a logger was installed successfully.
static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs the global logger according to `config`.
///
/// Only the first successful call in a process has an effect; later calls
/// return `Ok(())` without touching the installed logger. A failed call (e.g.
/// an unopenable log file) installs nothing, so it can be retried. Lines are
/// formatted as `[LEVEL] message`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LineCodeError> {
    if LOGGER_INSTALLED.load(Ordering::Acquire) {
        return Ok(());
    }
    install(config)?;
    LOGGER_INSTALLED.store(true, Ordering::Release);
    Ok(())
}

fn install(config: &LoggingConfig) -> Result<(), LineCodeError> {
    let mut builder = env_logger::Builder::new();

    builder.is_test(false);
    builder.filter_level(LevelFilter::from(config.level));

    builder.format(|buf, record| {
        writeln!(buf, "[{}] {}", record.level(), record.args())?;
        buf.flush()?;
        Ok(())
    });

    if let Some(filename) = &config.log_file {
        let file = OpenOptions::new().append(true).create(true).open(filename)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Another crate may already own the global logger; that is not an error here.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    // One test only: the global logger can be installed once per test binary.
    #[test]
    fn test_failed_init_can_be_retried_then_is_idempotent() {
        let bad = LoggingConfig {
            level: LogLevel::Debug,
            log_file: Some("/nonexistent-eightbtenb-dir/eightbtenb.log".to_string()),
        };
        assert!(matches!(init_logging(&bad), Err(LineCodeError::Io(_))));

        let good = LoggingConfig {
            level: LogLevel::Debug,
            log_file: None,
        };
        assert!(init_logging(&good).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);

        let quiet = LoggingConfig {
            level: LogLevel::Off,
            log_file: None,
        };
        assert!(init_logging(&quiet).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
