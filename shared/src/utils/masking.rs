//! Masking helpers so credentials never show up verbatim in logs

use once_cell::sync::Lazy;
use regex::Regex;

// local part, then everything from '@' on
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^@]+)(@.*)$").expect("email mask pattern is valid")
});

/// Mask an email address for display (e.g., jo****@example.com)
///
/// Keeps at most the first two characters of the local part. Values that
/// do not look like an email address are fully masked.
pub fn mask_email(email: &str) -> String {
    match EMAIL_REGEX.captures(email) {
        Some(caps) => {
            let local = &caps[1];
            let visible: String = local.chars().take(2.min(local.chars().count() - 1)).collect();
            format!("{}****{}", visible, &caps[2])
        }
        None => "****".to_string(),
    }
}

/// Mask a secret completely, preserving only whether it was empty
pub fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "********"
    }
}
