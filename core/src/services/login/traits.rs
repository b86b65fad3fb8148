//! Capabilities the login form handler is given instead of reaching for globals

use async_trait::async_trait;

use crate::domain::{HttpRequest, HttpResponse, LogLevel, SubmitEvent};
use crate::errors::TransportError;

/// A text input whose current value can be read
pub trait FieldAccessor: Send + Sync {
    /// Stable identifier of the input, e.g. `email`
    fn id(&self) -> &str;
    /// Current value, exactly as typed
    fn value(&self) -> String;
}

/// HTTP client used for the login request
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Send one request and wait for its status; no retries
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Structured logger the outcome of each attempt is reported to
pub trait LoggerTrait: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// A form element emitting events the handler can listen to
#[async_trait]
pub trait FormElementTrait: Send {
    /// Selector identifying the form, e.g. `.login`
    fn selector(&self) -> &str;
    /// Next event fired on the form, or `None` once the form is gone
    async fn next_event(&mut self) -> Option<SubmitEvent>;

    /// Return control to whoever fired the last event
    ///
    /// Called as soon as the listener has cancelled the event (if it is a
    /// trigger) and read the inputs, before any request is sent. Forms whose
    /// dispatch does not wait for its listener can ignore it.
    fn event_handled(&mut self) {}
}
