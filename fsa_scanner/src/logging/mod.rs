//! Global logging module for the FSA scanner
//!
//! Provides thread-safe global logging with coded events and a clean macro
//! interface. Until a service is installed every logging call is a no-op, so
//! the scanner can be used as a plain library without any setup.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system from runtime preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    for code in codes::ALL_ERROR_CODES {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let logging_service = Arc::new(LoggingService::with_preferences(preferences));

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(
        LogEvent::success(
            codes::success::SYSTEM_INITIALIZATION_COMPLETED,
            "Global logging system initialized",
        )
        .with_context("min_level", preferences.min_log_level.as_str()),
    );

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach a logger; lets macros skip formatting
pub fn enabled(level: LogLevel) -> bool {
    try_get_global_logger().is_some_and(|logger| logger.should_log(level))
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(mut event: LogEvent, line: Option<u32>, context: Vec<(&str, &str)>) {
    if let Some(line) = line {
        event = event.with_line(line);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<u32>,
    context: Vec<(&str, &str)>,
) {
    dispatch(LogEvent::error(code, message), line, context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), None, context);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::info(message), None, context);
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, line: Option<u32>, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::debug(message), line, context);
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Installs a debug-level memory logger as the global logger exactly once per
/// test binary and hands it to every test that inspects emitted events.
#[cfg(test)]
pub(crate) fn test_memory_logger() -> Arc<MemoryLogger> {
    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    MEMORY
        .get_or_init(|| {
            let memory = Arc::new(MemoryLogger::new());
            let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
            init_global_logging_with_service(service)
                .expect("no other test installs a global logger");
            memory
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_logging_never_panics() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
        log_info_with_context("noop", vec![("key", "value")]);
    }

    #[test]
    fn test_double_initialization_is_rejected() {
        let memory = test_memory_logger();
        assert!(is_initialized());
        assert!(enabled(LogLevel::Debug));

        let service = Arc::new(LoggingService::new(memory, LogLevel::Error));
        assert!(init_global_logging_with_service(service).is_err());
        assert!(init_global_logging(&LoggingPreferences::default()).is_err());
    }

    #[test]
    fn test_error_context_reaches_logger() {
        let memory = test_memory_logger();
        log_error_with_context(
            codes::input::IO_ERROR,
            "read failed",
            Some(12),
            vec![("marker", "test_error_context_reaches_logger")],
        );

        let found = memory.get_errors().into_iter().any(|event| {
            event.line == Some(12)
                && event.context.get("marker").map(String::as_str)
                    == Some("test_error_context_reaches_logger")
        });
        assert!(found);
    }
}
