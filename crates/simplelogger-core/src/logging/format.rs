//! Record rendering shared by the file and console backends

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

use chrono::Timelike;

/// Terminator appended to every line written to a log file
pub const LINE_ENDING: &str = "\r\n";

/// Label used for the header line of a logged error
pub const EXCEPTION_LABEL: &str = "EXCEPTION";

/// Render one record as `[H:MM|LABEL] message\r\n`
///
/// The hour is not padded, the minute always has two digits.
pub fn format_record<T: Timelike>(time: &T, label: &str, message: &str) -> String {
    let mut line = String::with_capacity(message.len() + label.len() + 12);
    line.push_str(&format!("[{}:{:02}|{}] ", time.hour(), time.minute(), label));
    line.push_str(message);
    line.push_str(LINE_ENDING);
    line
}

/// Render a record stamped with the current local time
pub fn format_now(label: &str, message: &str) -> String {
    format_record(&chrono::Local::now(), label, message)
}

/// Lines describing an error: its message, every cause, then a backtrace of
/// the calling thread when backtraces are enabled.
pub fn render_trace(error: &dyn Error) -> Vec<String> {
    let mut lines: Vec<String> = error.to_string().lines().map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("Caused by: {}", cause));
        source = cause.source();
    }

    let backtrace = Backtrace::capture();
    if backtrace.status() == BacktraceStatus::Captured {
        lines.push("Backtrace:".to_string());
        lines.extend(backtrace.to_string().lines().map(str::to_string));
    }

    lines
}
