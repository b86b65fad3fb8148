//! # Login Form Core
//!
//! Domain types, capability traits, and the login form handler. Everything
//! that touches the outside world (form element, inputs, HTTP, logging) is
//! reached through an injected trait so the flow can run against real
//! adapters or in-memory test doubles alike.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
