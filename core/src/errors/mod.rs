//! Error types for the login exchange

use thiserror::Error;

/// Why an HTTP exchange did not complete
///
/// Both variants end up as `Outcome::TransportFailure`; neither is ever
/// propagated past the handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The request could not be sent or no response arrived
    #[error("request failed: {0}")]
    Request(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_messages() {
        let error = TransportError::Request("connection refused".to_string());
        assert_eq!(error.to_string(), "request failed: connection refused");

        let error = TransportError::Encode("key must be a string".to_string());
        assert!(error.to_string().starts_with("failed to encode request body"));
    }
}
