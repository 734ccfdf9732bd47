// src/utils/log.rs

//! Status-line console output.
//!
//! Every line goes to stdout with a timestamp and a glyph that tells
//! success, warnings and errors apart at a glance. Internal tracing goes
//! through the `log` facade instead.

use std::sync::OnceLock;

use chrono::Local;

/// Log level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

/// Kind of a status line, shown as its leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warn,
    Error,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Success => "✅",
            Status::Info => "•",
            Status::Warn => "⚠️",
            Status::Error => "❌",
        }
    }

    /// Level that filters this status; success lines are always shown.
    fn level(&self) -> Option<LogLevel> {
        match self {
            Status::Success => None,
            Status::Info => Some(LogLevel::Info),
            Status::Warn => Some(LogLevel::Warn),
            Status::Error => Some(LogLevel::Error),
        }
    }
}

/// Current log level
static LOG_LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Initialize the status output with a level name (`info`, `warn`, ...).
///
/// `debug` shows everything `info` does; debug tracing itself goes through
/// the `log` facade.
pub fn init(level: &str) {
    let _ = LOG_LEVEL.set(LogLevel::from_str(level));
}

/// Check if a status should be displayed
fn should_log(status: Status) -> bool {
    let current = LOG_LEVEL.get().copied().unwrap_or(LogLevel::Info);
    status.level().is_none_or(|level| level >= current)
}

/// Glyph-prefixed status text, without the timestamp.
pub fn format_status(status: Status, message: &str) -> String {
    format!("{} {}", status.glyph(), message)
}

/// Format a status line with timestamp and glyph
fn format_line(status: Status, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] {}", timestamp, format_status(status, message))
}

/// Print a status line if the current level allows it.
pub fn emit(status: Status, message: &str) {
    if should_log(status) {
        println!("{}", format_line(status, message));
    }
}

/// Log an info message
pub fn info(message: &str) {
    emit(Status::Info, message);
}

/// Log a warning message
pub fn warn(message: &str) {
    emit(Status::Warn, message);
}

/// Log an error message
pub fn error(message: &str) {
    emit(Status::Error, message);
}

/// Log a success message (always shown)
pub fn success(message: &str) {
    emit(Status::Success, message);
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    if should_log(Status::Info) {
        let msg = format!("[STEP {}/{}] {}", step_num, total, message);
        println!("{}", format_line(Status::Info, &msg));
    }
}

/// Log a sub-item (indented)
pub fn sub_item(message: &str) {
    if should_log(Status::Info) {
        let msg = format!("    {}", message);
        println!("{}", format_line(Status::Info, &msg));
    }
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    if should_log(Status::Info) {
        let title_msg = format!("[SUMMARY] {}", title);
        println!("{}", format_line(Status::Info, &title_msg));

        for (key, value) in items {
            let item_msg = format!("    {}: {}", key, value);
            println!("{}", format_line(Status::Info, &item_msg));
        }
    }
}
