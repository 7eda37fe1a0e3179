//! Process-wide logger used by `clover!`.
//!
//! Init-once: the first of `init()` or `global()` wins for the lifetime of
//! the process.

use std::sync::OnceLock;

use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide logger.
///
/// Returns the logger back when one is already installed.
pub fn init(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// The process-wide logger, installing `Logger::from_default_config()` on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_default_config)
}
