//! File-backed logger
//!
//! A `FileLogger` owns an append-mode handle to one file. Writes are flushed
//! immediately. A failed write is retried once, with a marker line, when the
//! storage probe says the medium is still there; any other failure is dropped.
//! All mutating operations on one instance are serialized by its lock.
//!
//! Instances are shared per file name through the
//! [`FileLoggerRegistry`](super::registry::FileLoggerRegistry); use
//! [`LoggerFactory::get_file_logger`](super::factory::LoggerFactory::get_file_logger)
//! to obtain one.

use std::error::Error;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::format::{self, EXCEPTION_LABEL, LINE_ENDING};
use super::storage::StorageProbe;
use super::traits::{LogLevel, Logger, LoggerState};

/// Marker written before re-sending a record whose first write failed
pub const RETRY_NOTICE: &str = "Exception writing log; recreating...";

/// Header written by [`FileLogger::log`] before the trace lines
pub const TRACE_HEADER: &str = "Stack trace follows...";

pub(crate) type Sink = Box<dyn Write + Send>;

struct FileLoggerState {
    base: LoggerState,
    sink: Option<Sink>,
}

/// A logger appending to a single file
pub struct FileLogger {
    path: PathBuf,
    enabled: bool,
    probe: Arc<dyn StorageProbe>,
    state: Mutex<FileLoggerState>,
}

impl FileLogger {
    /// Open `path` for appending, creating it if needed
    ///
    /// If the file cannot be opened the logger is still returned, but every
    /// write on it is a no-op.
    pub(crate) fn open(
        path: PathBuf,
        level: LogLevel,
        enabled: bool,
        probe: Arc<dyn StorageProbe>,
    ) -> Self {
        let sink = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(Box::new(file) as Sink),
            Err(e) => {
                log::warn!(target: "simplelogger", "cannot open {}: {}", path.display(), e);
                None
            }
        };
        Self::with_sink(path, sink, level, enabled, probe)
    }

    pub(crate) fn with_sink(
        path: PathBuf,
        sink: Option<Sink>,
        level: LogLevel,
        enabled: bool,
        probe: Arc<dyn StorageProbe>,
    ) -> Self {
        Self {
            path,
            enabled,
            probe,
            state: Mutex::new(FileLoggerState {
                base: LoggerState::new("", level),
                sink,
            }),
        }
    }

    /// Absolute path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the write handle is still open
    pub fn is_open(&self) -> bool {
        self.state.lock().sink.is_some()
    }

    /// Truncate the log file to zero length
    ///
    /// Uses a separate handle; the append handle keeps writing at the new end.
    pub fn clear(&self) {
        let _state = self.state.lock();
        if !self.enabled || self.path.as_os_str().is_empty() {
            return;
        }
        let result = OpenOptions::new()
            .write(true)
            .create(true)
            .open(&self.path)
            .and_then(|file| file.set_len(0));
        if let Err(e) = result {
            log::warn!(target: "simplelogger", "cannot clear {}: {}", self.path.display(), e);
        }
    }

    /// Flush and release the write handle; later writes are no-ops
    pub fn close(&self) {
        let mut state = self.state.lock();
        if let Some(mut sink) = state.sink.take() {
            let _ = sink.flush();
        }
    }

    fn write_log(&self, level: LogLevel, label: &str, text: &str) {
        let mut state = self.state.lock();
        if !self.enabled || level < state.base.level || state.sink.is_none() {
            return;
        }
        self.write_line(&mut state, label, text, true);
    }

    fn write_line(&self, state: &mut FileLoggerState, label: &str, text: &str, retry: bool) {
        let line = format::format_now(label, text);
        let Some(sink) = state.sink.as_mut() else {
            return;
        };
        let result = sink.write_all(line.as_bytes()).and_then(|_| sink.flush());
        if result.is_err() && retry && self.probe.is_available() {
            self.write_line(state, label, RETRY_NOTICE, false);
            self.write_line(state, label, text, false);
        }
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FileLogger")
            .field("path", &self.path)
            .field("enabled", &self.enabled)
            .field("tag", &state.base.tag)
            .field("level", &state.base.level)
            .field("open", &state.sink.is_some())
            .finish()
    }
}

impl Logger for FileLogger {
    fn level(&self) -> LogLevel {
        self.state.lock().base.level
    }

    fn set_level(&self, level: LogLevel) {
        self.state.lock().base.level = level;
    }

    fn tag(&self) -> String {
        self.state.lock().base.tag.clone()
    }

    fn set_tag(&self, tag: &str) {
        self.state.lock().base.tag = tag.to_string();
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        let state = self.state.lock();
        self.enabled && level >= state.base.level && state.sink.is_some()
    }

    fn write(&self, level: LogLevel, message: &str) {
        self.write_log(level, level.as_str(), message);
    }

    fn log(&self, error: &dyn Error) {
        let mut state = self.state.lock();
        if !self.enabled || LogLevel::Error < state.base.level || state.sink.is_none() {
            return;
        }
        self.write_line(&mut state, EXCEPTION_LABEL, TRACE_HEADER, true);

        if let Some(sink) = state.sink.as_mut() {
            for line in format::render_trace(error) {
                let _ = sink
                    .write_all(line.as_bytes())
                    .and_then(|_| sink.write_all(LINE_ENDING.as_bytes()));
            }
            let _ = sink.flush();
        }
    }
}
