//! HTTP client configuration

use serde::{Deserialize, Serialize};

/// Settings for the client that talks to the login endpoint
///
/// There is intentionally no request timeout here: a login request waits
/// until the server answers or the transport fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Origin that relative endpoint paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    /// Create a configuration pointing at the given origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

fn default_base_url() -> String {
    String::from("http://127.0.0.1:8080")
}

fn default_user_agent() -> String {
    format!("login-form/{}", env!("CARGO_PKG_VERSION"))
}
