//! Domain types for a single login submission

pub mod credentials;
pub mod http_exchange;
pub mod log_level;
pub mod outcome;
pub mod submit_event;

pub use credentials::Credentials;
pub use http_exchange::{HttpRequest, HttpResponse, CONTENT_TYPE_JSON, METHOD_POST};
pub use log_level::LogLevel;
pub use outcome::Outcome;
pub use submit_event::SubmitEvent;
