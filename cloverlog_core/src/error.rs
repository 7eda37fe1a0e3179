use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The destination could not be opened or written. Never swallowed.
    #[error("cloverlog could not write to file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log tag must not be empty")]
    EmptyTag,
}

pub type Result<T> = std::result::Result<T, LogError>;
