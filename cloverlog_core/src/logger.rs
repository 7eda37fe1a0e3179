//! The logger facade and its builder.

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::sync::Arc;

use cloverlog_config::LogConfig;
use cloverlog_traits::clock::{Clock, SystemClock};

use crate::caller::{CallerInfo, resolve_caller};
use crate::error::{LogError, Result};
use crate::line::{LogLine, format_timestamp};
use crate::writer::append_line;

/// Where a logger gets its configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigMode {
    /// Resolved once, used for every call.
    Fixed(LogConfig),
    /// Re-read from this file on every call; missing or bad files mean defaults.
    Reload(PathBuf),
}

impl Default for ConfigMode {
    fn default() -> Self {
        ConfigMode::Fixed(LogConfig::default())
    }
}

/// Per-field values that win over whatever the config source says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Overrides {
    separator: Option<String>,
    file: Option<PathBuf>,
}

impl Overrides {
    fn is_empty(&self) -> bool {
        self.separator.is_none() && self.file.is_none()
    }

    fn apply(&self, mut cfg: LogConfig) -> LogConfig {
        if let Some(sep) = &self.separator {
            cfg.separator.clone_from(sep);
        }
        if let Some(file) = &self.file {
            cfg.file.clone_from(file);
        }
        cfg
    }
}

/// Formats one line per call and appends it to the configured file.
///
/// Log through `clover_to!` (or `clover!` for the process-wide logger) so the
/// line records the enclosing function.
#[derive(Clone)]
pub struct Logger {
    mode: ConfigMode,
    overrides: Overrides,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("mode", &self.mode)
            .field("overrides", &self.overrides)
            .finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    /// Start building a Logger.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger over `LogConfig::load()`, resolved once.
    pub fn from_default_config() -> Self {
        Self::builder().config(LogConfig::load()).build()
    }

    pub fn mode(&self) -> &ConfigMode {
        &self.mode
    }

    /// Effective configuration for the next call: the config source with the
    /// builder's `separator`/`file` overrides on top.
    pub fn config(&self) -> Cow<'_, LogConfig> {
        let base = match &self.mode {
            ConfigMode::Fixed(cfg) if self.overrides.is_empty() => return Cow::Borrowed(cfg),
            ConfigMode::Fixed(cfg) => cfg.clone(),
            ConfigMode::Reload(path) => LogConfig::load_from(path),
        };
        Cow::Owned(self.overrides.apply(base))
    }

    /// Log with the caller's file and line but no function name.
    ///
    /// A method cannot see the function it is called from, so the function
    /// field is always `-` here, meaning "unknown" rather than "not inside a
    /// function". Prefer `clover_to!`, which records the enclosing function.
    #[track_caller]
    pub fn log_without_function(&self, tag: &str, args: &[&dyn Display]) -> Result<()> {
        self.log_at(tag, resolve_caller(), args)
    }

    /// Log with an explicit call site.
    pub fn log_at(&self, tag: &str, caller: CallerInfo, args: &[&dyn Display]) -> Result<()> {
        let cfg = self.config();
        let line = self.render_with(&cfg, tag, &caller, args)?;
        append_line(line.as_str(), &cfg.file)
    }

    /// Build the line a call would write, without writing it.
    pub fn render(&self, tag: &str, caller: &CallerInfo, args: &[&dyn Display]) -> Result<LogLine> {
        self.render_with(&self.config(), tag, caller, args)
    }

    fn render_with(
        &self,
        cfg: &LogConfig,
        tag: &str,
        caller: &CallerInfo,
        args: &[&dyn Display],
    ) -> Result<LogLine> {
        if tag.is_empty() {
            return Err(LogError::EmptyTag);
        }
        let ts = format_timestamp(self.clock.now());
        Ok(LogLine::build(&ts, &cfg.separator, tag, caller, args))
    }
}

/// Builder for `Logger`. Unset fields fall back to `LogConfig::default()`
/// and the system clock.
#[derive(Default)]
pub struct LoggerBuilder {
    mode: ConfigMode,
    overrides: Overrides,
    clock: Option<Arc<dyn Clock + Send + Sync>>,
}

impl LoggerBuilder {
    /// Use a fixed configuration.
    pub fn config(mut self, cfg: LogConfig) -> Self {
        self.mode = ConfigMode::Fixed(cfg);
        self
    }

    /// Override the separator. Applies on top of the config source in both
    /// modes, including after every reload.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.overrides.separator = Some(sep.into());
        self
    }

    /// Override the destination file. Applies on top of the config source in
    /// both modes, including after every reload.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.overrides.file = Some(path.into());
        self
    }

    /// Re-read the config file at `path` on every call.
    pub fn reload_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.mode = ConfigMode::Reload(path.into());
        self
    }

    pub fn clock<C: Clock + Send + Sync + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            mode: self.mode,
            overrides: self.overrides,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
        }
    }
}
