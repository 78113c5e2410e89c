//! Console logger implementation

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::format::render_trace;
use super::traits::{LogLevel, Logger, LoggerState};

/// Host system log: writes one line at a severity under a tag
///
/// Treated as infallible by the loggers that use it.
pub trait SystemLog: Send + Sync {
    fn write(&self, level: LogLevel, tag: &str, message: &str);
}

/// Forwards records to the `log` facade, using the tag as target
///
/// The application decides where they end up by installing a backend
/// (`android_logger`, `env_logger`, a syslog writer...).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogFacade {
    fn native_level(level: LogLevel) -> log::Level {
        match level {
            LogLevel::Verbose => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

impl SystemLog for LogFacade {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        log::log!(target: tag, Self::native_level(level), "{}", message);
    }
}

/// Writes records straight to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl SystemLog for Stderr {
    fn write(&self, level: LogLevel, tag: &str, message: &str) {
        eprintln!("{} {}: {}", tag, level, message);
    }
}

/// A logger that forwards to the host system log
pub struct ConsoleLogger {
    state: Mutex<LoggerState>,
    sink: Arc<dyn SystemLog>,
}

impl ConsoleLogger {
    /// Create a console logger writing to the `log` facade
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_sink(tag, Arc::new(LogFacade))
    }

    /// Create a console logger writing to a custom system log
    pub fn with_sink(tag: impl Into<String>, sink: Arc<dyn SystemLog>) -> Self {
        Self {
            state: Mutex::new(LoggerState::new(tag, LogLevel::Verbose)),
            sink,
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ConsoleLogger")
            .field("tag", &state.tag)
            .field("level", &state.level)
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.state.lock().level
    }

    fn set_level(&self, level: LogLevel) {
        self.state.lock().level = level;
    }

    fn tag(&self) -> String {
        self.state.lock().tag.clone()
    }

    fn set_tag(&self, tag: &str) {
        self.state.lock().tag = tag.to_string();
    }

    fn write(&self, level: LogLevel, message: &str) {
        let tag = {
            let state = self.state.lock();
            if level < state.level {
                return;
            }
            state.tag.clone()
        };
        self.sink.write(level, &tag, message);
    }

    fn log(&self, error: &dyn Error) {
        if !self.is_enabled(LogLevel::Error) {
            return;
        }
        self.write(LogLevel::Error, &render_trace(error).join("\n"));
    }
}
