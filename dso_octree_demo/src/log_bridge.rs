//! Routes octree log entries into the `log` facade.
//!
//! The octree ships its own minimal logger; applications that already use
//! `log` (here with `env_logger`) install this bridge so everything ends up
//! in one stream, filtered by `RUST_LOG`.

use dso_octree::dso::log::{LogEntry, LogSeverity, Logger};

/// Forwards every entry to `log::log!` with the entry's source as target.
pub struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = level_for(entry.severity);
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

fn level_for(severity: LogSeverity) -> log::Level {
    match severity {
        LogSeverity::Trace => log::Level::Trace,
        LogSeverity::Debug => log::Level::Debug,
        LogSeverity::Info => log::Level::Info,
        LogSeverity::Warn => log::Level::Warn,
        LogSeverity::Error => log::Level::Error,
    }
}

/// Octree severity matching a `log` max level, so entries the facade would
/// drop are not even formatted.
pub fn min_severity_for(filter: log::LevelFilter) -> LogSeverity {
    match filter {
        log::LevelFilter::Trace => LogSeverity::Trace,
        log::LevelFilter::Debug => LogSeverity::Debug,
        log::LevelFilter::Info => LogSeverity::Info,
        log::LevelFilter::Warn => LogSeverity::Warn,
        log::LevelFilter::Error | log::LevelFilter::Off => LogSeverity::Error,
    }
}
