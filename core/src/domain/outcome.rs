use std::fmt;

use super::LogLevel;

/// Result of one login attempt
///
/// The three variants are exhaustive: either the server answered with a 2xx,
/// the server answered with anything else, or the exchange never completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Response received with a status in 200..=299
    Success { status: u16 },
    /// Response received with any other status; the body is not read
    Rejected { status: u16 },
    /// The request could not be built or the exchange did not complete
    TransportFailure { detail: String },
}

impl Outcome {
    /// Classify a received status code
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            Outcome::Success { status }
        } else {
            Outcome::Rejected { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Level the outcome is reported at
    pub fn log_level(&self) -> LogLevel {
        match self {
            Outcome::Success { .. } => LogLevel::Info,
            Outcome::Rejected { .. } | Outcome::TransportFailure { .. } => LogLevel::Error,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { .. } => write!(f, "Login successful"),
            Outcome::Rejected { status } => write!(f, "Login failed (HTTP {})", status),
            Outcome::TransportFailure { detail } => write!(f, "Login request error: {}", detail),
        }
    }
}
