#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Append-only line logger.
//!
//! Each call renders
//! `timestamp SEP tag SEP file SEP function SEP line SEP arg1 SEP ... argN`
//! and appends it to the configured file, opening and closing the file per call.
//!
//! ## Architecture
//!
//! - **Caller**: call-site identity via `#[track_caller]` or the `caller!` macro (`caller` module)
//! - **Line**: timestamp and field assembly (`line` module)
//! - **Writer**: single-write append (`writer` module)
//! - **Logger**: config resolution, fixed or per-call reload (`logger` module)
//! - **Global**: init-once process logger behind `clover!` (`global` module)
//!
//! ```no_run
//! use cloverlog_core::{Logger, clover_to};
//!
//! let logger = Logger::builder().file("/tmp/app.log").build();
//! clover_to!(logger, "info", "user logged in", 42)?;
//! # Ok::<(), cloverlog_core::LogError>(())
//! ```
pub mod caller;
pub mod error;
pub mod global;
pub mod line;
pub mod logger;
pub mod writer;

pub use caller::{CallerInfo, NO_FUNCTION, resolve_caller};
pub use cloverlog_config::LogConfig;
pub use error::{LogError, Result};
pub use global::{global, init};
pub use line::{LogLine, format_timestamp};
pub use logger::{ConfigMode, Logger, LoggerBuilder};
pub use writer::append_line;

/// Log through an explicit `Logger`, recording the enclosing function.
///
/// `clover_to!(logger, "warn", "job failed", retries)` evaluates to `Result<(), LogError>`.
#[macro_export]
macro_rules! clover_to {
    ($logger:expr, $tag:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_at(
            $tag,
            $crate::caller!(),
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Log through the process-wide logger (see `init` / `global`).
#[macro_export]
macro_rules! clover {
    ($tag:expr $(, $arg:expr)* $(,)?) => {
        $crate::clover_to!($crate::global(), $tag $(, $arg)*)
    };
}
