//! Logging abstractions and backends

mod traits;
mod format;
mod noop;
mod console;
mod storage;
pub mod file_logger;
pub mod registry;
pub mod factory;

pub use traits::{LogLevel, Logger, LoggerExt, SharedLogger};
pub use format::{format_record, render_trace, EXCEPTION_LABEL, LINE_ENDING};
pub use noop::NullLogger;
pub use console::{ConsoleLogger, LogFacade, Stderr, SystemLog};
pub use storage::{DirectoryProbe, StorageProbe};
pub use file_logger::FileLogger;
pub use registry::FileLoggerRegistry;
pub use factory::{
    get_console_logger, get_file_logger, get_logger, global, init,
    LoggerFactory, LoggerKind,
};
