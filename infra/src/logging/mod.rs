//! Logging module
//!
//! - **TracingLogger**: forwards handler log entries to `tracing`
//! - **RecordingLogger**: keeps entries in memory for tests and demos
//! - **init_tracing**: installs the process-wide subscriber

pub mod init;
pub mod recording_logger;
pub mod tracing_logger;

pub use init::init_tracing;
pub use recording_logger::{LogEntry, RecordingLogger};
pub use tracing_logger::TracingLogger;
