//! Mock HTTP client
//!
//! Answers every request with a scripted status or transport failure and
//! keeps the requests it was given, so tests can check exactly what would
//! have gone over the wire.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::debug;

use lf_core::{HttpClientTrait, HttpRequest, HttpResponse, TransportError};

#[derive(Debug, Clone)]
enum Script {
    Status(u16),
    Fail(String),
}

/// Mock HTTP client recording every request
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    /// Answer every request with `status`
    pub fn with_status(status: u16) -> Self {
        Self::scripted(Script::Status(status))
    }

    /// Fail every request at the transport level with `detail`
    pub fn failing(detail: impl Into<String>) -> Self {
        Self::scripted(Script::Fail(detail.into()))
    }

    fn scripted(script: Script) -> Self {
        Self {
            script: Arc::new(Mutex::new(script)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Change the answer for subsequent requests
    pub fn set_status(&self, status: u16) {
        *self.script.lock().unwrap_or_else(|e| e.into_inner()) = Script::Status(status);
    }

    /// Requests received so far, oldest first
    pub fn sent_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl HttpClientTrait for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method, path = %request.path, "Mock HTTP request");
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        let script = self.script.lock().unwrap_or_else(|e| e.into_inner()).clone();
        match script {
            Script::Status(status) => Ok(HttpResponse::new(status)),
            Script::Fail(detail) => Err(TransportError::Request(detail)),
        }
    }
}
