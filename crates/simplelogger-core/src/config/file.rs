//! Logger settings and their sources (YAML file, environment)

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;
use crate::logging::{LogFacade, LogLevel, Stderr, SystemLog};

/// Environment variable toggling logging on or off
pub const ENV_ENABLED: &str = "SIMPLELOGGER_ENABLED";
/// Environment variable holding the initial minimum level
pub const ENV_LEVEL: &str = "SIMPLELOGGER_LOG_LEVEL";
/// Environment variable holding the log directory
pub const ENV_DIR: &str = "SIMPLELOGGER_DIR";

/// Where console loggers send their records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleTarget {
    /// The `log` crate facade
    #[default]
    LogFacade,
    /// Plain stderr
    Stderr,
}

impl ConsoleTarget {
    pub fn system_log(&self) -> Arc<dyn SystemLog> {
        match self {
            ConsoleTarget::LogFacade => Arc::new(LogFacade),
            ConsoleTarget::Stderr => Arc::new(Stderr),
        }
    }
}

/// Settings handed to a [`LoggerFactory`](crate::logging::LoggerFactory)
///
/// ```yaml
/// enabled: true
/// base_dir: /var/log/myapp
/// level: info
/// console: stderr
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// When false every logger is muted
    pub enabled: bool,
    /// Directory file logger names are resolved against
    pub base_dir: PathBuf,
    /// Initial minimum level for new loggers
    pub level: LogLevel,
    /// Backend for console loggers
    pub console: ConsoleTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_dir: Self::default_base_dir(),
            level: LogLevel::Verbose,
            console: ConsoleTarget::default(),
        }
    }
}

impl LoggerConfig {
    /// `<local data dir>/simplelogger`, or the temp dir when there is none
    pub fn default_base_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("simplelogger")
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_console(mut self, console: ConsoleTarget) -> Self {
        self.console = console;
        self
    }

    /// Parse a YAML document; missing fields take their defaults
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Defaults with the `SIMPLELOGGER_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply the `SIMPLELOGGER_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(ENV_ENABLED) {
            self.enabled = value == "1" || value.to_lowercase() == "true";
        }
        if let Some(value) = lookup(ENV_LEVEL) {
            match value.parse() {
                Ok(level) => self.level = level,
                Err(e) => log::warn!(target: "simplelogger", "ignoring {}: {}", ENV_LEVEL, e),
            }
        }
        if let Some(value) = lookup(ENV_DIR).filter(|v| !v.is_empty()) {
            self.base_dir = PathBuf::from(value);
        }
        self
    }
}
