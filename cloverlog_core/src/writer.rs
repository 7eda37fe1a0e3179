use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{LogError, Result};

/// Append `line` to `path` in a single write, creating the file if needed.
///
/// The handle is opened and closed per call. Nothing is written when the open
/// fails. Concurrent writers are not locked against each other.
pub fn append_line(line: &str, path: &Path) -> Result<()> {
    let write_err = |source| LogError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(line.as_bytes()).map_err(write_err)?;
    tracing::trace!(path = %path.display(), bytes = line.len(), "appended log line");
    Ok(())
}
