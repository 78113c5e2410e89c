//! Logger trait definition

use std::error::Error;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Log severities, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl LogLevel {
    /// All levels, least severe first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Label used in rendered records
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" | "trace" => Ok(LogLevel::Verbose),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

/// Tag and minimum level shared by every logger variant
#[derive(Debug)]
pub(crate) struct LoggerState {
    pub tag: String,
    pub level: LogLevel,
}

impl LoggerState {
    pub fn new(tag: impl Into<String>, level: LogLevel) -> Self {
        Self {
            tag: tag.into(),
            level,
        }
    }
}

/// Logger abstraction shared by all backends
///
/// Implementations:
/// - `ConsoleLogger`: Forwards to the host system log
/// - `FileLogger`: Appends to a file shared through the registry
/// - `NullLogger`: Drops everything
///
/// Every method takes `&self`; implementations keep their tag and level
/// behind a lock so a logger can be shared as `Arc<dyn Logger>` between threads.
pub trait Logger: Send + Sync {
    /// Current minimum severity
    fn level(&self) -> LogLevel;

    /// Replace the minimum severity
    fn set_level(&self, level: LogLevel);

    /// Current tag
    fn tag(&self) -> String;

    /// Replace the tag
    fn set_tag(&self, tag: &str);

    /// Whether a record at `level` would be emitted
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Emit `message` at `level` if it passes the minimum severity
    fn write(&self, level: LogLevel, message: &str);

    /// Emit an error followed by its trace, at ERROR severity
    fn log(&self, error: &dyn Error);

    /// Log a verbose message
    fn verbose(&self, message: &str) {
        self.write(LogLevel::Verbose, message);
    }

    /// Log a debug message
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    /// Log a warning message
    fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
///
/// Arguments are rendered only when the level is enabled. A `Display` impl
/// that fails while rendering panics in the caller, as `format!` would.
pub trait LoggerExt: Logger {
    /// Render `args` and emit them at `level`
    fn write_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.write(level, &args.to_string());
        }
    }

    /// Log a verbose message with format arguments
    fn verbose_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_args(LogLevel::Verbose, args);
    }

    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_args(LogLevel::Debug, args);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_args(LogLevel::Info, args);
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_args(LogLevel::Warn, args);
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.write_args(LogLevel::Error, args);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.verbose_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.debug_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.info_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.warn_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::logging::LoggerExt as _;
        $logger.error_fmt(format_args!($($arg)*))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records every emitted message in memory
    struct Recorder {
        level: Mutex<LogLevel>,
        lines: Mutex<Vec<(LogLevel, String)>>,
    }

    impl Recorder {
        fn new(level: LogLevel) -> Self {
            Self {
                level: Mutex::new(level),
                lines: Mutex::new(Vec::new()),
            }
        }
    }

    impl Logger for Recorder {
        fn level(&self) -> LogLevel {
            *self.level.lock()
        }
        fn set_level(&self, level: LogLevel) {
            *self.level.lock() = level;
        }
        fn tag(&self) -> String {
            "recorder".to_string()
        }
        fn set_tag(&self, _tag: &str) {}
        fn write(&self, level: LogLevel, message: &str) {
            if self.is_enabled(level) {
                self.lines.lock().push((level, message.to_string()));
            }
        }
        fn log(&self, error: &dyn Error) {
            self.write(LogLevel::Error, &error.to_string());
        }
    }

    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Verbose);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert_eq!(" Warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(ConfigError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_level_filtering_every_pair() {
        for min in LogLevel::ALL {
            let logger = Recorder::new(min);
            for level in LogLevel::ALL {
                logger.write(level, "x");
            }
            let emitted: Vec<LogLevel> = logger.lines.lock().iter().map(|(l, _)| *l).collect();
            let expected: Vec<LogLevel> = LogLevel::ALL.into_iter().filter(|l| *l >= min).collect();
            assert_eq!(emitted, expected, "min level {}", min);
        }
    }

    #[test]
    fn test_convenience_methods() {
        let logger = Recorder::new(LogLevel::Verbose);
        logger.verbose("v");
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        let lines = logger.lines.lock();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], (LogLevel::Verbose, "v".to_string()));
        assert_eq!(lines[4], (LogLevel::Error, "e".to_string()));
    }

    #[test]
    fn test_format_macros() {
        let logger = Recorder::new(LogLevel::Info);
        log_debug!(logger, "hidden {}", 1);
        log_info!(logger, "count={} name={}", 3, "abc");
        log_error!(logger, "{:>4}", 7);

        let lines = logger.lines.lock();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, "count=3 name=abc");
        assert_eq!(lines[1].1, "   7");
    }

    #[test]
    fn test_filtered_args_are_not_rendered() {
        let logger = Recorder::new(LogLevel::Error);
        // Rendering FailingDisplay would panic; the level check must come first
        logger.debug_fmt(format_args!("{}", FailingDisplay));
        assert!(logger.lines.lock().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_format_failure_reaches_caller() {
        let logger = Recorder::new(LogLevel::Verbose);
        logger.info_fmt(format_args!("{}", FailingDisplay));
    }

    #[test]
    fn test_level_serde() {
        let level: LogLevel = serde_yaml::from_str("Warn").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert_eq!(serde_yaml::to_string(&LogLevel::Info).unwrap().trim(), "info");
        assert!(serde_yaml::from_str::<LogLevel>("nope").is_err());
    }
}
