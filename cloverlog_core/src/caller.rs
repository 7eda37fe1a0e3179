//! Call-site identity for log lines.
//!
//! File and line come from `#[track_caller]` (or `file!()`/`line!()` in the
//! macros), so no stack walking or frame offsets are involved. The enclosing
//! function is only observable from a macro expanded at the call site.

use std::fmt;
use std::panic::Location;

/// Sentinel used when the call site has no observable named function.
pub const NO_FUNCTION: &str = "-";

const CLOSURE_SEGMENT: &str = "{{closure}}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl CallerInfo {
    pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
        let function = function.into();
        Self {
            file: file.into(),
            function: if function.is_empty() {
                NO_FUNCTION.to_string()
            } else {
                function
            },
            line,
        }
    }

    /// Caller from a source location; the function is unknown.
    pub fn from_location(loc: &Location<'_>) -> Self {
        Self::new(loc.file(), NO_FUNCTION, loc.line())
    }

    /// Caller from a location plus the `type_name` path of the enclosing item.
    pub fn from_function_path(file: &str, function_path: &str, line: u32) -> Self {
        Self::new(file, function_name(function_path).unwrap_or(NO_FUNCTION), line)
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Location of whoever called the nearest non-`#[track_caller]` frame.
#[track_caller]
pub fn resolve_caller() -> CallerInfo {
    CallerInfo::from_location(Location::caller())
}

/// Last named segment of a `type_name` path, skipping closure frames.
///
/// `app::worker::Worker::process_job::{{closure}}` -> `process_job`
pub fn function_name(path: &str) -> Option<&str> {
    path.rsplit("::")
        .map(str::trim)
        .find(|seg| !seg.is_empty() && *seg != CLOSURE_SEGMENT)
}

/// `type_name` path of the function enclosing the macro call site.
#[doc(hidden)]
#[macro_export]
macro_rules! __enclosing_fn {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or("")
    }};
}

/// `CallerInfo` for the macro call site, including the enclosing function.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::CallerInfo::from_function_path(
            ::core::file!(),
            $crate::__enclosing_fn!(),
            ::core::line!(),
        )
    };
}
