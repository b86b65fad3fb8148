use lf_shared::masking::{mask_email, mask_secret};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The email/password pair captured from the form at submission time
///
/// Values are taken exactly as typed; empty strings are legal and nothing is
/// trimmed or validated. A fresh value is built for every submission.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &mask_email(&self.email))
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_exactly_two_keys() {
        let credentials = Credentials::new("a@b.com", "secret");
        let json = serde_json::to_string(&credentials).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","password":"secret"}"#);
    }

    #[test]
    fn test_empty_values_pass_through() {
        let credentials = Credentials::new("", "");
        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(value, serde_json::json!({"email": "", "password": ""}));
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let credentials = Credentials::new("john.doe@example.com", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("john.doe"));
        assert!(debug.contains("@example.com"));
    }
}
