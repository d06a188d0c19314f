//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::vocabulary::VocabularyError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, HuaError, TracingErrorReporter,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = HuaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let hua_error = HuaError::Io(io_error);
    assert!(format!("{hua_error}").contains("file not found"));

    let hua_error = HuaError::from(ConfigError::MissingValue("vocabulary.path".to_string()));
    assert_eq!(
        hua_error.to_string(),
        "Configuration error: Missing required configuration value: vocabulary.path"
    );

    let hua_error = HuaError::from(VocabularyError::FileNotFound(PathBuf::from("words.txt")));
    assert_eq!(
        hua_error.to_string(),
        "Vocabulary error: Vocabulary file not found: words.txt"
    );
}

/// Test that the read error keeps the IO failure as its source.
#[test]
fn test_vocabulary_read_error_source() {
    let error = VocabularyError::Read {
        path: PathBuf::from("words.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };

    assert_eq!(error.to_string(), "Failed to read vocabulary file words.txt: denied");
    assert!(std::error::Error::source(&error).is_some());
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    report_error(ErrorContext::new(
        HuaError::Custom("test error".to_string()),
        "test_component",
    ));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(HuaError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
