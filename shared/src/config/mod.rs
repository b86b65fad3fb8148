//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `form` - Which form, inputs, event, and endpoint the handler is wired to
//! - `http` - Login endpoint origin and client settings

pub mod environment;
pub mod form;
pub mod http;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use form::FormConfig;
pub use http::HttpConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Form wiring configuration
    #[serde(default)]
    pub form: FormConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create configuration with logging defaults for the given environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            form: FormConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load defaults for the environment named in the process environment
    pub fn from_env() -> Self {
        Self::for_environment(Environment::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_uses_environment_logging() {
        let config = AppConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.form, FormConfig::default());
    }

    #[test]
    fn test_app_config_deserializes_from_empty_object() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.http.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.form.endpoint, "/api/login");
    }
}
