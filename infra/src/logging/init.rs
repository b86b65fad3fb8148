//! Process-wide tracing subscriber setup

use tracing_subscriber::EnvFilter;

use lf_shared::config::{LogFormat, LoggingConfig};

use crate::InfrastructureError;

/// Install the global subscriber described by `config`
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr so
/// stdout stays free for the program itself. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            InfrastructureError::Config(format!("invalid log filter '{}': {}", config.level, e))
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| {
        InfrastructureError::Config(format!("failed to install tracing subscriber: {}", e))
    })
}
