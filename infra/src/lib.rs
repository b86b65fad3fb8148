//! # Infrastructure Layer
//!
//! Concrete implementations of the capabilities the login form handler is
//! given: an HTTP client, loggers, form and input adapters, plus
//! configuration loading and tracing setup.
//!
//! ## Architecture
//!
//! - **HTTP**: `reqwest` client and a scripted mock
//! - **Logging**: `tracing` logger, in-memory recording logger, subscriber init
//! - **Form**: text inputs and a channel-backed form element
//! - **Config**: layered defaults, TOML file, and environment variables

// Re-export core types for convenience
pub use lf_core::*;

/// Configuration loading
pub mod config;

/// Form and input adapters
pub mod form;

/// HTTP client module - login endpoint transport
pub mod http;

/// Logging module - logger capabilities and tracing setup
pub mod logging;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Base URL could not be used to resolve endpoint paths
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(error: ::config::ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}
