//! Null logger implementation

use std::error::Error;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::traits::{LogLevel, Logger};

/// Process-wide null logger instance
static NULL_LOGGER: Lazy<Arc<NullLogger>> = Lazy::new(|| Arc::new(NullLogger { _private: () }));

/// A logger that does nothing
///
/// Handed out when logging is disabled or explicitly not wanted. There is a
/// single instance per process; obtain it through [`NullLogger::shared`].
#[derive(Debug)]
pub struct NullLogger {
    _private: (),
}

impl NullLogger {
    /// The shared null logger
    pub fn shared() -> Arc<NullLogger> {
        Arc::clone(&NULL_LOGGER)
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Verbose
    }
    fn set_level(&self, _level: LogLevel) {}
    fn tag(&self) -> String {
        "null".to_string()
    }
    fn set_tag(&self, _tag: &str) {}
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }
    fn write(&self, _level: LogLevel, _message: &str) {}
    fn log(&self, _error: &dyn Error) {}
}
