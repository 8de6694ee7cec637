use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::{PROGRAM_LOG_LEVEL, PROGRAM_NAME};

/// Dependencies (hyper, reqwest, ...) only get through at this level or above.
const DEPENDENCY_LEVEL: Level = Level::Warn;

pub struct Logger {
    level: Level,
}

impl Logger {
    fn threshold_for(&self, target: &str) -> Level {
        if is_own_target(target) {
            self.level
        } else {
            self.level.min(DEPENDENCY_LEVEL)
        }
    }
}

/// Module paths of the workspace crates all start with `filemgr` (`filemgr_fs::store`, ...).
fn is_own_target(target: &str) -> bool {
    target.starts_with(PROGRAM_NAME)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.threshold_for(metadata.target())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            // Stderr keeps log lines out of the prompt's stdout.
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
        .unwrap_or(Level::Warn)
}

/// Install the stderr logger, with the level taken from `FILEMGR_LOG_LEVEL`.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs; later calls keep the original level so
    // the max level set on the facade never disagrees with the logger.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger { level });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
