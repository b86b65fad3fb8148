//! Login form wiring configuration

use serde::{Deserialize, Serialize};

/// Where the login form lives and what it posts to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormConfig {
    /// Selector of the form element the handler is attached to
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Event type that counts as a submission intent
    #[serde(default = "default_event_type")]
    pub event_type: String,

    /// Id of the email input
    #[serde(default = "default_email_field")]
    pub email_field: String,

    /// Id of the password input
    #[serde(default = "default_password_field")]
    pub password_field: String,

    /// Path the credentials are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            event_type: default_event_type(),
            email_field: default_email_field(),
            password_field: default_password_field(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_selector() -> String {
    String::from(".login")
}

fn default_event_type() -> String {
    String::from("submit")
}

fn default_email_field() -> String {
    String::from("email")
}

fn default_password_field() -> String {
    String::from("password")
}

fn default_endpoint() -> String {
    String::from("/api/login")
}
