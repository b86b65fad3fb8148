//! In-memory logger

use std::sync::{Arc, Mutex};

use lf_core::{LogLevel, LoggerTrait};

/// One recorded log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every entry; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of entries at exactly `level`
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|entry| entry.level == level)
            .count()
    }
}

impl LoggerTrait for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LogEntry {
                level,
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_logger_counts_by_level() {
        let logger = RecordingLogger::new();
        let shared = logger.clone();

        shared.log(LogLevel::Info, "Login successful");
        shared.log(LogLevel::Error, "Login failed (HTTP 401)");
        shared.log(LogLevel::Error, "Login request error: timed out");

        assert_eq!(logger.count(LogLevel::Info), 1);
        assert_eq!(logger.count(LogLevel::Error), 2);
        assert_eq!(logger.count(LogLevel::Warn), 0);
        assert_eq!(logger.entries()[0].message, "Login successful");
        assert_eq!(shared.entries().len(), 3);
    }
}
