use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use lf_infra::config::load_config;
use lf_infra::http::ReqwestHttpClient;
use lf_infra::logging::{init_tracing, TracingLogger};

mod app;
mod args;
mod terminal;

use app::{run_form, Mode};
use args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Load configuration
    let mut config = load_config(args.config.as_deref()).context("loading configuration")?;
    if let Some(base_url) = &args.base_url {
        config.http.base_url = base_url.clone();
    }

    // Initialize logger
    init_tracing(&config.logging).context("initializing logging")?;

    info!(
        environment = %config.environment,
        selector = %config.form.selector,
        "Starting login form"
    );

    let http_client =
        Arc::new(ReqwestHttpClient::new(&config.http).context("creating HTTP client")?);

    let mode = match args.one_shot() {
        Some((email, password)) => Mode::OneShot {
            email: email.to_string(),
            password: password.to_string(),
        },
        None => Mode::Interactive,
    };

    let summary = run_form(
        &config.form,
        http_client,
        Arc::new(TracingLogger::new()),
        mode,
        BufReader::new(tokio::io::stdin()),
    )
    .await?;

    println!("{}", summary);
    Ok(summary.exit_code())
}
