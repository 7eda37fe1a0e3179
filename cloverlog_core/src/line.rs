//! Line assembly: `timestamp SEP tag SEP file SEP function SEP line SEP args...`.

use std::fmt::{self, Display, Write as _};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::caller::CallerInfo;

/// chrono format for the leading timestamp field (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// Platform line terminator appended to every line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Render `t` in local time as `YYYY-MM-DD-HH:MM:SS`.
pub fn format_timestamp(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format(TIMESTAMP_FORMAT).to_string()
}

/// Display each arg and join with `sep`. Zero args give an empty string.
pub fn join_args(args: &[&dyn Display], sep: &str) -> String {
    let mut out = String::new();
    for (i, a) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{a}");
    }
    out
}

/// One fully formatted line, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine(String);

impl LogLine {
    pub fn build(
        timestamp: &str,
        sep: &str,
        tag: &str,
        caller: &CallerInfo,
        args: &[&dyn Display],
    ) -> Self {
        let args = join_args(args, sep);
        let mut s = String::with_capacity(
            timestamp.len() + tag.len() + caller.file.len() + caller.function.len() + args.len() + 48,
        );
        let _ = write!(
            s,
            "{timestamp}{sep}{tag}{sep}{file}{sep}{function}{sep}{line}{sep}{args}{LINE_ENDING}",
            file = caller.file,
            function = caller.function,
            line = caller.line,
        );
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The line without its terminator.
    pub fn trimmed(&self) -> &str {
        self.0.strip_suffix(LINE_ENDING).unwrap_or(&self.0)
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}
