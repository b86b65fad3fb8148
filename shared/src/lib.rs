//! Shared configuration and utilities for the login form client
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types (environment, logging, form wiring, HTTP endpoint)
//! - Utility functions (credential masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, FormConfig, HttpConfig, LogFormat, LoggingConfig};
pub use utils::masking;
