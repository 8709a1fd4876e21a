//! Internal logging system for the DSO octree
//!
//! This module provides a small pluggable logging layer with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global logger behind a RwLock
//! - File and line information for detailed ERROR logs
//!
//! The octree only logs from construction; traversal is silent.

use colored::*;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route octree logs elsewhere (the `log` facade,
/// a file, an in-game console, ...).
///
/// # Example
///
/// ```no_run
/// use dso_octree::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "dso_octree::builder")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    fn to_u8(self) -> u8 {
        match self {
            LogSeverity::Trace => 0,
            LogSeverity::Debug => 1,
            LogSeverity::Info => 2,
            LogSeverity::Warn => 3,
            LogSeverity::Error => 4,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            eprintln!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            eprintln!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(2); // Info

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Replace the global logger
///
/// # Example
///
/// ```no_run
/// use dso_octree::log::{self, Logger, LogEntry};
///
/// struct MyLogger;
/// impl Logger for MyLogger {
///     fn log(&self, entry: &LogEntry) {
///         println!("{}", entry.message);
///     }
/// }
///
/// log::set_logger(MyLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = logger_lock().write() {
        *lock = Box::new(logger);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut lock) = logger_lock().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Set the minimum severity forwarded to the logger (default: Info)
pub fn set_min_severity(severity: LogSeverity) {
    MIN_SEVERITY.store(severity.to_u8(), Ordering::Relaxed);
}

/// Current minimum severity forwarded to the logger
pub fn min_severity() -> LogSeverity {
    LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

/// Check whether an entry of this severity would reach the logger
#[inline]
pub fn enabled(severity: LogSeverity) -> bool {
    severity >= min_severity()
}

/// Logging entry point (for simple logs without file:line)
///
/// Used by macros like dso_info!, dso_warn!, etc.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger_lock().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Logging entry point with file:line information (for ERROR logs)
///
/// Used by dso_error! macro to include source location.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if !enabled(severity) {
        return;
    }
    if let Ok(lock) = logger_lock().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
#[macro_export]
macro_rules! dso_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Trace) {
            $crate::log::log(
                $crate::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// dso_octree::dso_debug!("dso_octree::builder", "Split node at depth {}", 3);
/// ```
#[macro_export]
macro_rules! dso_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogSeverity::Debug) {
            $crate::log::log(
                $crate::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! dso_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! dso_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! dso_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
