//! Integration tests for the octree logging system
//!
//! These tests swap the global logger, so they run serialized.
//!
//! Run with: cargo test --test logging_integration_tests

use dso_octree::dso::log::{self, LogEntry, LogSeverity, Logger};
use dso_octree::dso::octree::{CatalogObject, OctreeBuilder, OctreeConfig};
use dso_octree::glam::DVec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Install a capturing logger at the given minimum severity
fn capture(min_severity: LogSeverity) -> Arc<Mutex<Vec<LogEntry>>> {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);
    log::set_min_severity(min_severity);
    entries
}

/// Restore the default logger and severity
fn restore() {
    log::reset_logger();
    log::set_min_severity(LogSeverity::Info);
}

fn catalog(count: u32) -> Vec<CatalogObject> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            CatalogObject::point(i, DVec3::new(t.sin() * 40.0, t.cos() * 40.0, (t * 0.37).sin() * 40.0), 12.0)
        })
        .collect()
}

// ============================================================================
// LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let entries = capture(LogSeverity::Info);

    dso_octree::log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    dso_octree::log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    dso_octree::log::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);

        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");

        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[1].message, "Test warning message");

        assert_eq!(captured[2].severity, LogSeverity::Error);
        assert_eq!(captured[2].message, "Test error message");
        assert!(captured[2].file.is_none());
    }

    restore();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let entries = capture(LogSeverity::Info);

    dso_octree::log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);

        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, "test::error");
        assert_eq!(entry.message, "Critical error occurred");
        assert_eq!(entry.file, Some("test_file.rs"));
        assert_eq!(entry.line, Some(42));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let entries = capture(LogSeverity::Info);

    dso_octree::log::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    restore();

    // Goes to the default logger, not captured
    dso_octree::log::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_integration_min_severity_filters_entries() {
    let entries = capture(LogSeverity::Info);
    assert_eq!(log::min_severity(), LogSeverity::Info);

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        dso_octree::log::log(severity, "test", format!("{:?} message", severity));
    }

    {
        let captured = entries.lock().unwrap();
        let severities: Vec<LogSeverity> = captured.iter().map(|entry| entry.severity).collect();
        assert_eq!(severities, vec![LogSeverity::Info, LogSeverity::Warn, LogSeverity::Error]);
    }

    restore();
}

#[test]
#[serial]
fn test_integration_logging_all_severities() {
    let entries = capture(LogSeverity::Trace);

    dso_octree::dso_trace!("test", "Trace message");
    dso_octree::dso_debug!("test", "Debug message {}", 2);
    dso_octree::dso_info!("test", "Info message");
    dso_octree::dso_warn!("test", "Warn message");
    dso_octree::dso_error!("test", "Error message");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 5);

        assert_eq!(captured[0].severity, LogSeverity::Trace);
        assert_eq!(captured[1].severity, LogSeverity::Debug);
        assert_eq!(captured[1].message, "Debug message 2");
        assert_eq!(captured[2].severity, LogSeverity::Info);
        assert_eq!(captured[3].severity, LogSeverity::Warn);
        assert_eq!(captured[4].severity, LogSeverity::Error);
        assert!(captured[4].file.is_some());
        assert!(captured[4].line.is_some());
    }

    restore();
}

// ============================================================================
// BUILDER LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_build_logs_summary() {
    let entries = capture(LogSeverity::Debug);

    let config = OctreeConfig::default().with_root(DVec3::ZERO, 50.0).with_split_threshold(4);
    let tree = OctreeBuilder::new(config).build(catalog(64)).expect("valid catalog");

    {
        let captured = entries.lock().unwrap();
        let summary = captured
            .iter()
            .find(|entry| entry.severity == LogSeverity::Info)
            .expect("info summary");
        assert_eq!(summary.source, "dso_octree::builder");
        assert!(summary.message.starts_with("Built octree: 64 objects"));
        assert!(summary.message.contains(&format!("{} nodes", tree.stats().node_count)));

        assert!(captured.iter().any(|entry| entry.severity == LogSeverity::Debug));
        assert!(captured.iter().all(|entry| entry.severity != LogSeverity::Warn));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_build_warns_on_degenerate_tree() {
    let entries = capture(LogSeverity::Info);

    // Everything is bright enough for the root
    let config = OctreeConfig::default()
        .with_root(DVec3::ZERO, 50.0)
        .with_root_magnitude(20.0)
        .with_split_threshold(4);
    OctreeBuilder::new(config).build(catalog(32)).expect("valid catalog");

    {
        let captured = entries.lock().unwrap();
        let warning = captured
            .iter()
            .find(|entry| entry.severity == LogSeverity::Warn)
            .expect("degenerate warning");
        assert!(warning.message.contains("Degenerate octree"));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_build_error_is_logged_with_location() {
    let entries = capture(LogSeverity::Info);

    let config = OctreeConfig::default().with_root(DVec3::ZERO, 1.0);
    let result = OctreeBuilder::new(config).build(catalog(8));
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);

        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, "dso_octree::builder");
        assert!(entry.message.contains("outside the octree root cell"));
        assert!(entry.file.is_some_and(|file| file.ends_with("builder.rs")));
        assert!(entry.line.is_some());
    }

    restore();
}
