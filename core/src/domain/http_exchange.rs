//! Transport-neutral request/response types handed to the HTTP capability

use serde::Serialize;
use std::fmt;

use crate::errors::TransportError;

pub const METHOD_POST: &str = "POST";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// An outgoing request, fully built before it reaches the HTTP client
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: &'static str,
    /// Path relative to the client's origin, e.g. `/api/login`
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Build a `POST` carrying `payload` as a JSON body
    pub fn post_json<T: Serialize>(path: &str, payload: &T) -> Result<Self, TransportError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        Ok(Self {
            method: METHOD_POST,
            path: path.to_string(),
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())],
            body,
        })
    }

    /// Look up a header value, ignoring name case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// The body carries a password; only its size is printed.
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// What the handler needs from a response: the status code, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// True for statuses in 200..=299
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
