//! Login form handler module
//!
//! Bridges a submission event on a login form to a single JSON `POST` and
//! reports the three-way outcome through the injected logger:
//! - Default action of the triggering event is always cancelled first
//! - Credentials are read from the two inputs at trigger time
//! - Exactly one request per event, no retries, no timeout
//! - Overlapping submissions run independently

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::LoginHandlerConfig;
pub use service::LoginFormHandler;
pub use traits::{FieldAccessor, FormElementTrait, HttpClientTrait, LoggerTrait};
