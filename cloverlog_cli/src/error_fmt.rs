//! Human-readable error descriptions and exit codes.

use cloverlog_core::LogError;

/// Exit code when the destination file cannot be written.
pub const EXIT_WRITE: i32 = 3;
/// Exit code for any other failure.
pub const EXIT_OTHER: i32 = 1;

/// Map an eyre::Report to a human-readable explanation with a fix hint.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(le) = err.downcast_ref::<LogError>() {
        return match le {
            LogError::Write { path, source } => format!(
                "What happened: Could not append to '{}' ({source}).\nHow to fix: Check that the directory exists and is writable, or point FILE / --file elsewhere.",
                path.display()
            ),
            LogError::EmptyTag => {
                "What happened: The tag was empty.\nHow to fix: Pass a non-empty tag, e.g. `cloverlog write info \"message\"`.".to_string()
            }
        };
    }
    format!(
        "Something went wrong: {err}\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
    )
}

pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match err.downcast_ref::<LogError>() {
        Some(LogError::Write { .. }) => EXIT_WRITE,
        _ => EXIT_OTHER,
    }
}
