//! Services wiring domain types to injected capabilities.

pub mod login;

// Re-export commonly used types
pub use login::{
    FieldAccessor, FormElementTrait, HttpClientTrait, LoggerTrait, LoginFormHandler,
    LoginHandlerConfig,
};
