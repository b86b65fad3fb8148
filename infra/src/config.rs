//! Configuration loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults for the environment in effect
//! 2. A TOML file (explicit path, or the environment's default file if present)
//! 3. `LOGIN_FORM__*` environment variables, `__` separating nested keys
//!    (e.g. `LOGIN_FORM__HTTP__BASE_URL`)
//!
//! The environment in effect is `environment` from the file or
//! `LOGIN_FORM__ENVIRONMENT` when set, otherwise `ENVIRONMENT` / `ENV` /
//! `RUST_ENV`. Its logging defaults sit underneath any `[logging]` keys.

use std::path::Path;

use ::config::{Config, ConfigError, Environment as EnvSource, File};
use lf_shared::config::{AppConfig, Environment};

use crate::InfrastructureError;

/// Prefix of environment variables overriding configuration
pub const ENV_PREFIX: &str = "LOGIN_FORM";

/// Load configuration, reading `.env` first if one exists
///
/// An explicit `path` must exist; without one, the default file of the
/// environment detected from the process (e.g. `login-form.development.toml`)
/// is used when present.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, InfrastructureError> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let detected = Environment::from_env();

    let file_source = || match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(detected.config_file()).required(false),
    };
    let env_source = || {
        EnvSource::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    };

    let overrides = Config::builder()
        .add_source(file_source())
        .add_source(env_source())
        .build()?;
    let environment = match overrides.get::<Environment>("environment") {
        Ok(environment) => environment,
        Err(ConfigError::NotFound(_)) => detected,
        Err(e) => return Err(e.into()),
    };
    let defaults = AppConfig::for_environment(environment);

    let config: AppConfig = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(file_source())
        .add_source(env_source())
        .build()?
        .try_deserialize()?;

    tracing::debug!(
        environment = %config.environment,
        base_url = %config.http.base_url,
        endpoint = %config.form.endpoint,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_shared::config::{LogFormat, LoggingConfig};
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.form.endpoint, "/api/login");
        assert_eq!(config.form.email_field, "email");
        assert_eq!(config.form.password_field, "password");
    }

    #[test]
    fn test_load_config_from_file() {
        let path = write_temp_config(
            "login-form-file",
            r#"
[http]
base_url = "https://auth.example.com"

[form]
event_type = "Sign In"

[logging]
format = "json"
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.http.base_url, "https://auth.example.com");
        assert_eq!(config.form.event_type, "Sign In");
        assert_eq!(config.form.endpoint, "/api/login");
        assert_eq!(config.logging.format, LogFormat::Json);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_environment_in_file_selects_logging_defaults() {
        let path = write_temp_config(
            "login-form-production",
            r#"
environment = "production"
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.logging, LoggingConfig::for_environment(Environment::Production));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_explicit_logging_keys_override_environment_defaults() {
        let path = write_temp_config(
            "login-form-staging-debug",
            r#"
environment = "staging"

[logging]
level = "debug"
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.colored);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let path = std::env::temp_dir().join("login-form-does-not-exist.toml");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_load_config_env_override() {
        std::env::set_var("LOGIN_FORM__FORM__SELECTOR", "#signin");

        let config = load_config(None).unwrap();
        assert_eq!(config.form.selector, "#signin");

        std::env::remove_var("LOGIN_FORM__FORM__SELECTOR");
    }
}
