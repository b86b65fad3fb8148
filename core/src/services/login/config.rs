//! Configuration for the login form handler

use lf_shared::config::FormConfig;

/// Which event the handler reacts to and where it posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginHandlerConfig {
    /// Event type treated as a submission intent
    pub event_type: String,
    /// Path the credentials are posted to
    pub endpoint: String,
}

impl Default for LoginHandlerConfig {
    fn default() -> Self {
        Self::from(&FormConfig::default())
    }
}

impl From<&FormConfig> for LoginHandlerConfig {
    fn from(form: &FormConfig) -> Self {
        Self {
            event_type: form.event_type.clone(),
            endpoint: form.endpoint.clone(),
        }
    }
}
