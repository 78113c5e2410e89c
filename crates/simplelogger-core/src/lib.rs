//! SimpleLogger Core
//!
//! Tagged loggers with interchangeable backends:
//! - `ConsoleLogger` forwards to the host system log (`log` facade or stderr)
//! - `FileLogger` appends timestamped lines to a file, one shared instance per file name
//! - `NullLogger` drops everything and is used whenever logging is disabled
//!
//! ```rust,no_run
//! use simplelogger_core::{log_info, Logger, LoggerConfig, LoggerFactory, LoggerKind};
//!
//! let factory = LoggerFactory::new(LoggerConfig::from_env());
//!
//! let logger = factory.get_logger("MainActivity", LoggerKind::Console);
//! log_info!(logger, "user {} signed in", 42);
//!
//! // Every caller asking for "session.log" gets the same instance
//! let file = factory.get_file_logger("session.log");
//! file.info("session started");
//! file.close();
//! ```

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, ConsoleTarget, LoggerConfig};

pub use logging::{
    LogLevel, Logger, LoggerExt, SharedLogger,
    ConsoleLogger, FileLogger, NullLogger,
    LoggerFactory, LoggerKind,
    get_logger, get_console_logger, get_file_logger,
};
