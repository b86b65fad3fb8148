//! Logger capability backed by `tracing`

use lf_core::{LogLevel, LoggerTrait};

/// Target every handler entry is emitted under
pub const LOG_TARGET: &str = "login_form";

/// Forwards each entry to the matching `tracing` macro
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoggerTrait for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: LOG_TARGET, "{}", message),
            LogLevel::Info => tracing::info!(target: LOG_TARGET, "{}", message),
            LogLevel::Warn => tracing::warn!(target: LOG_TARGET, "{}", message),
            LogLevel::Error => tracing::error!(target: LOG_TARGET, "{}", message),
        }
    }
}
