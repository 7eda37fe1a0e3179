//! Subcommand handlers.

use std::path::{Path, PathBuf};

use cloverlog_config::{KEY_FILE, KEY_SEPARATOR, LogConfig};
use cloverlog_core::{CallerInfo, Logger};
use eyre::{Result, WrapErr};

/// Resolve the effective config from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> LogConfig {
    match path {
        Some(p) => LogConfig::load_from(p),
        None => LogConfig::load(),
    }
}

pub struct WriteArgs {
    pub tag: String,
    pub args: Vec<String>,
    pub file: Option<PathBuf>,
    pub separator: Option<String>,
    pub caller: CallerInfo,
}

pub fn write(cfg: LogConfig, w: WriteArgs) -> Result<()> {
    let mut builder = Logger::builder().config(cfg);
    if let Some(f) = w.file {
        builder = builder.file(f);
    }
    if let Some(s) = w.separator {
        builder = builder.separator(s);
    }
    let logger = builder.build();

    let values: Vec<&dyn std::fmt::Display> = w
        .args
        .iter()
        .map(|a| a as &dyn std::fmt::Display)
        .collect();
    logger.log_at(&w.tag, w.caller.clone(), &values)?;
    tracing::debug!(tag = %w.tag, caller = %w.caller, file = %logger.config().file.display(), "line appended");
    Ok(())
}

pub fn show_config(cfg: &LogConfig, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(cfg).wrap_err("serialize config");
    }
    Ok(format!(
        "{KEY_SEPARATOR}={}\n{KEY_FILE}={}",
        cfg.separator,
        cfg.file.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_config_output() {
        let out = show_config(&LogConfig::default(), false).unwrap();
        assert_eq!(out, "SEPARATOR=::\nFILE=/tmp/cloverlog");
    }

    #[test]
    fn json_config_output() {
        let out = show_config(&LogConfig::default(), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["separator"], "::");
        assert_eq!(v["file"], "/tmp/cloverlog");
    }
}
