#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Configuration for the cloverlog line writer.
//!
//! - `LogConfig` holds the field separator and the destination file.
//! - Values come from an INI-style `cloverlogger.conf`; a missing or
//!   unparseable file is never an error, the defaults apply instead.
pub mod ini;

pub use ini::{IniMap, parse_ini};

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Separator placed between fields when `SEPARATOR` is not configured.
pub const DEFAULT_SEPARATOR: &str = "::";
/// Destination used when `FILE` is not configured.
pub const DEFAULT_FILE: &str = "/tmp/cloverlog";
/// Config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "cloverlogger.conf";
/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CLOVERLOG_CONFIG";

/// Recognized keys.
pub const KEY_SEPARATOR: &str = "SEPARATOR";
pub const KEY_FILE: &str = "FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    /// Field delimiter
    pub separator: String,
    /// Destination log file (opened in append mode per line)
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            file: PathBuf::from(DEFAULT_FILE),
        }
    }
}

impl LogConfig {
    /// Overlay recognized keys from `map` onto the defaults. Unknown keys are ignored.
    pub fn from_map(map: &IniMap) -> Self {
        let mut cfg = Self::default();
        if let Some(sep) = map.get(KEY_SEPARATOR) {
            cfg.separator = sep.clone();
        }
        if let Some(file) = map.get(KEY_FILE) {
            cfg.file = PathBuf::from(file);
        }
        cfg
    }

    pub fn from_ini_str(text: &str) -> eyre::Result<Self> {
        parse_ini(text).map(|map| Self::from_map(&map))
    }

    /// Read and parse `path`. `Ok(None)` when the file does not exist.
    pub fn try_load_from(path: &Path) -> eyre::Result<Option<Self>> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => eyre::bail!("read config {}: {}", path.display(), e),
        };
        let cfg = Self::from_ini_str(&text)
            .map_err(|e| eyre::eyre!("parse config {}: {}", path.display(), e))?;
        Ok(Some(cfg))
    }

    /// Load `path`, falling back to defaults when it is missing or unusable.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unusable config file; using defaults");
                Self::default()
            }
        }
    }

    /// Load from `default_config_path()`.
    pub fn load() -> Self {
        Self::load_from(&default_config_path())
    }
}

/// `$CLOVERLOG_CONFIG` when set and non-empty, else `cloverlogger.conf` in the
/// working directory.
///
/// The fallback is relative, so the file found depends on the process working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(CONFIG_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn missing_file_emits_debug_event() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = LogConfig::load_from(&dir.path().join("cloverlogger.conf"));
        assert_eq!(cfg, LogConfig::default());
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .any(|l| l.contains("DEBUG") && l.contains("config file not found"))
            {
                true => Ok(()),
                false => Err(format!("no debug fallback event in {lines:?}")),
            }
        });
        assert!(!logs_contain("ignoring unusable config file"));
    }

    #[test]
    #[traced_test]
    fn unparseable_file_emits_warn_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloverlogger.conf");
        std::fs::write(&path, "not ini at all\n").unwrap();

        let cfg = LogConfig::load_from(&path);
        assert_eq!(cfg, LogConfig::default());
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .any(|l| l.contains("WARN") && l.contains("ignoring unusable config file"))
            {
                true => Ok(()),
                false => Err(format!("no warn fallback event in {lines:?}")),
            }
        });
    }

    #[test]
    #[traced_test]
    fn valid_file_emits_no_fallback_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloverlogger.conf");
        std::fs::write(&path, "SEPARATOR=|\n").unwrap();

        assert_eq!(LogConfig::load_from(&path).separator, "|");
        assert!(!logs_contain("config file not found"));
        assert!(!logs_contain("ignoring unusable config file"));
    }
}
