//! Entry points for obtaining loggers
//!
//! A [`LoggerFactory`] is built from a [`LoggerConfig`] and hands out console,
//! null and file loggers. File loggers are deduplicated per file name.
//!
//! ```no_run
//! use simplelogger_core::config::LoggerConfig;
//! use simplelogger_core::logging::{Logger, LoggerFactory, LoggerKind};
//!
//! let factory = LoggerFactory::new(LoggerConfig::default().with_base_dir("/tmp/logs"));
//!
//! let console = factory.get_logger("MainActivity", LoggerKind::Console);
//! console.info("started");
//!
//! let file = factory.get_file_logger("app.log");
//! file.clear();
//! file.warn("written to /tmp/logs/app.log");
//! ```

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::console::{ConsoleLogger, SystemLog};
use super::file_logger::FileLogger;
use super::noop::NullLogger;
use super::registry::FileLoggerRegistry;
use super::storage::{DirectoryProbe, StorageProbe};
use super::traits::{Logger, SharedLogger};
use crate::config::{ConfigError, ConfigResult, LoggerConfig};

/// Kind of logger returned by [`LoggerFactory::get_logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggerKind {
    #[default]
    Console,
    Null,
}

/// Builds loggers according to a [`LoggerConfig`]
pub struct LoggerFactory {
    config: LoggerConfig,
    system_log: Arc<dyn SystemLog>,
    probe: Arc<dyn StorageProbe>,
    registry: FileLoggerRegistry,
}

impl LoggerFactory {
    /// Create a factory; `config.base_dir` is created if missing
    pub fn new(config: LoggerConfig) -> Self {
        if config.enabled {
            if let Err(e) = fs::create_dir_all(&config.base_dir) {
                log::warn!(
                    target: "simplelogger",
                    "cannot create {}: {}",
                    config.base_dir.display(),
                    e
                );
            }
        }
        Self {
            system_log: config.console.system_log(),
            probe: Arc::new(DirectoryProbe::new(config.base_dir.clone())),
            registry: FileLoggerRegistry::new(),
            config,
        }
    }

    /// Replace the system log used by console loggers
    pub fn with_system_log(mut self, system_log: Arc<dyn SystemLog>) -> Self {
        self.system_log = system_log;
        self
    }

    /// Replace the storage probe handed to file loggers
    pub fn with_storage_probe(mut self, probe: Arc<dyn StorageProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// The process-wide null logger
    pub fn null_logger() -> Arc<NullLogger> {
        NullLogger::shared()
    }

    /// A console or null logger tagged with `tag`
    ///
    /// Always the null logger when logging is disabled.
    pub fn get_logger(&self, tag: &str, kind: LoggerKind) -> SharedLogger {
        if !self.config.enabled {
            return Self::null_logger();
        }
        match kind {
            LoggerKind::Console => {
                let logger = ConsoleLogger::with_sink(tag, Arc::clone(&self.system_log));
                logger.set_level(self.config.level);
                Arc::new(logger)
            }
            LoggerKind::Null => Self::null_logger(),
        }
    }

    /// Shorthand for `get_logger(tag, LoggerKind::Console)`
    pub fn get_console_logger(&self, tag: &str) -> SharedLogger {
        self.get_logger(tag, LoggerKind::Console)
    }

    /// The shared file logger for `file_name`
    ///
    /// Returns the same instance for as long as any caller holds one.
    pub fn get_file_logger(&self, file_name: &str) -> Arc<FileLogger> {
        self.registry.get_or_create(file_name, || {
            FileLogger::open(
                self.resolve_path(file_name),
                self.config.level,
                self.config.enabled,
                Arc::clone(&self.probe),
            )
        })
    }

    /// Absolute path a file name resolves to
    pub fn resolve_path(&self, file_name: &str) -> PathBuf {
        let joined = self.config.base_dir.join(file_name);
        std::path::absolute(&joined).unwrap_or(joined)
    }

    /// Registry backing [`get_file_logger`](Self::get_file_logger)
    pub fn registry(&self) -> &FileLoggerRegistry {
        &self.registry
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("config", &self.config)
            .field("file_loggers", &self.registry.len())
            .finish()
    }
}

/// Process-wide factory
static GLOBAL_FACTORY: OnceCell<LoggerFactory> = OnceCell::new();

/// Install the process-wide factory; fails if one is already in use
pub fn init(config: LoggerConfig) -> ConfigResult<()> {
    GLOBAL_FACTORY
        .set(LoggerFactory::new(config))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The process-wide factory, built from the environment on first use
pub fn global() -> &'static LoggerFactory {
    GLOBAL_FACTORY.get_or_init(|| LoggerFactory::new(LoggerConfig::from_env()))
}

/// Get a console or null logger from the global factory
pub fn get_logger(tag: &str, kind: LoggerKind) -> SharedLogger {
    global().get_logger(tag, kind)
}

/// Get a console logger from the global factory
pub fn get_console_logger(tag: &str) -> SharedLogger {
    global().get_console_logger(tag)
}

/// Get the shared file logger for `file_name` from the global factory
pub fn get_file_logger(file_name: &str) -> Arc<FileLogger> {
    global().get_file_logger(file_name)
}
